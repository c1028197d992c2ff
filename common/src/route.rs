//! Client-side routes.

use crate::api::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Canchas { edit_id: Option<i64> },
    Reservas { edit_id: Option<i64> },
    ConfirmDelete { target: Resource, id: i64 },
    NotFound,
}

impl Route {
    /// Resolves a location. `param` looks up a query-string parameter.
    pub fn parse(path: &str, param: impl Fn(&str) -> Option<String>) -> Self {
        let id = || param("id").and_then(|id| id.trim().parse::<i64>().ok());

        match path.trim_end_matches('/') {
            "" => Route::Dashboard,
            "/canchas" => Route::Canchas { edit_id: id() },
            "/reservas" => Route::Reservas { edit_id: id() },
            "/confirm-delete" | "/delete-conf" => {
                let target = param("t").and_then(|t| t.parse::<Resource>().ok());
                match (target, id()) {
                    (Some(target), Some(id)) => Route::ConfirmDelete { target, id },
                    _ => Route::NotFound,
                }
            }
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Dashboard | Route::NotFound => "/".to_string(),
            Route::Canchas { edit_id: None } => "/canchas".to_string(),
            Route::Canchas { edit_id: Some(id) } => format!("/canchas?id={}", id),
            Route::Reservas { edit_id: None } => "/reservas".to_string(),
            Route::Reservas { edit_id: Some(id) } => format!("/reservas?id={}", id),
            Route::ConfirmDelete { target, id } => {
                format!("/confirm-delete?t={}&id={}", target.as_str(), id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(href: &str) -> Route {
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        let pairs: Vec<(String, String)> = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Route::parse(path, |key| {
            pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn hrefs_parse_back() {
        for route in [
            Route::Dashboard,
            Route::Canchas { edit_id: None },
            Route::Canchas { edit_id: Some(4) },
            Route::Reservas { edit_id: Some(9) },
            Route::ConfirmDelete {
                target: Resource::Canchas,
                id: 2,
            },
        ] {
            assert_eq!(parse(&route.href()), route);
        }
    }

    #[test]
    fn trailing_slashes_and_legacy_delete_path() {
        assert_eq!(parse("/canchas/"), Route::Canchas { edit_id: None });
        assert_eq!(
            parse("/delete-conf?t=reservas&id=3"),
            Route::ConfirmDelete {
                target: Resource::Reservas,
                id: 3
            }
        );
    }

    #[test]
    fn malformed_locations() {
        assert_eq!(parse("/confirm-delete?t=usuarios&id=3"), Route::NotFound);
        assert_eq!(parse("/confirm-delete?t=canchas"), Route::NotFound);
        assert_eq!(parse("/canchas?id=abc"), Route::Canchas { edit_id: None });
        assert_eq!(parse("/ajustes"), Route::NotFound);
    }
}
