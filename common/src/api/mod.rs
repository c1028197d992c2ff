//! Request catalogue and transport seam for the Paddler backend.
//!
//! Every endpoint the front end consumes is an [`ApiRequest`] constructor:
//! method, path relative to the configured base URI, and query parameters
//! (the backend reads all inputs, including those of `POST`/`PATCH`, from
//! the query string). Executing a request is delegated to a [`Backend`]
//! implementation: the browser adapter in the `frontend` crate, or a
//! recording fake in tests.

#[cfg(test)]
pub(crate) mod fake;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::ErrorBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// The two entity collections exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Canchas,
    Reservas,
}

impl Resource {
    /// Path segment, also used as the `t` query parameter of the delete
    /// confirmation route.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Canchas => "canchas",
            Resource::Reservas => "reservas",
        }
    }

    /// Singular noun used in user-facing text.
    pub fn noun(&self) -> &'static str {
        match self {
            Resource::Canchas => "cancha",
            Resource::Reservas => "reserva",
        }
    }
}

impl FromStr for Resource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canchas" => Ok(Resource::Canchas),
            "reservas" => Ok(Resource::Reservas),
            _ => Err(()),
        }
    }
}

/// Search criteria accepted by `GET /reservas/q/`.
///
/// `nom_cancha` may contain `*` wildcards and `dia` may be a `low:high`
/// range; both are interpreted by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservaSearch {
    pub nom_cancha: Option<String>,
    pub dia: Option<String>,
    pub id_cancha: Option<i64>,
}

/// The writable fields of a reservation, as query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservaFields {
    pub dia: String,
    pub hora: i64,
    pub dur_mins: i64,
    pub tel: String,
    pub nom_contacto: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path with a leading slash, relative to the backend base URI.
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
        }
    }

    fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    fn param_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Liveness probe issued once at startup.
    pub fn greeting() -> Self {
        Self::new(Method::Get, "/")
    }

    pub fn list_canchas() -> Self {
        Self::new(Method::Get, "/canchas/")
    }

    pub fn get_cancha(id: i64) -> Self {
        Self::new(Method::Get, format!("/canchas/id/{}", id))
    }

    pub fn create_cancha(nombre: &str, techada: bool) -> Self {
        Self::new(Method::Post, "/canchas/")
            .param("nombre", nombre)
            .param("techada", techada)
    }

    pub fn update_cancha(id: i64, nombre: &str, techada: bool) -> Self {
        Self::new(Method::Patch, format!("/canchas/id/{}", id))
            .param("nombre", nombre)
            .param("techada", techada)
    }

    pub fn delete(resource: Resource, id: i64) -> Self {
        Self::new(Method::Delete, format!("/{}/id/{}/", resource.as_str(), id))
    }

    pub fn list_reservas() -> Self {
        Self::new(Method::Get, "/reservas/")
    }

    pub fn search_reservas(search: &ReservaSearch) -> Self {
        Self::new(Method::Get, "/reservas/q/")
            .param_opt("id_cancha", search.id_cancha)
            .param_opt("nom_cancha", search.nom_cancha.as_deref())
            .param_opt("dia", search.dia.as_deref())
    }

    /// Fetches one reservation; with `full` the backend joins its court.
    pub fn get_reserva(id: i64, full: bool) -> Self {
        Self::new(Method::Get, format!("/reservas/id/{}/", id)).param("full", full)
    }

    pub fn create_reserva(id_cancha: i64, fields: &ReservaFields) -> Self {
        Self::new(Method::Post, format!("/reservas/cancha/{}/", id_cancha)).reserva_fields(fields)
    }

    pub fn update_reserva(id: i64, fields: &ReservaFields) -> Self {
        Self::new(Method::Patch, format!("/reservas/id/{}/", id)).reserva_fields(fields)
    }

    fn reserva_fields(self, fields: &ReservaFields) -> Self {
        self.param("dia", &fields.dia)
            .param("hora", fields.hora)
            .param("dur_mins", fields.dur_mins)
            .param("tel", &fields.tel)
            .param("nom_contacto", &fields.nom_contacto)
    }

    /// Absolute URL without the query string.
    pub fn url(&self, base_uri: &str) -> String {
        format!("{}{}", base_uri.trim_end_matches('/'), self.path)
    }

    /// Value of a query parameter, if present.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}

/// The parts of an HTTP response the front end cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The backend's explanation of a failure, when the body carries one.
    pub fn error_detail(&self) -> Option<String> {
        ErrorBody::parse(&self.body).map(|body| body.summary())
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (network down, CORS, ...).
    #[error("fallo de red: {0}")]
    Transport(String),

    #[error("respuesta inesperada del servidor: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("el servidor respondió {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },
}

impl ClientError {
    pub fn from_response(response: &ApiResponse) -> Self {
        Self::Status {
            status: response.status,
            status_text: response.status_text.clone(),
            detail: response.error_detail(),
        }
    }

    /// The error text, followed by the backend's own detail when it sent one.
    pub fn cause(&self) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => format!("{}: {}", self, detail),
            other => other.to_string(),
        }
    }
}

/// Standard reason phrase for the statuses the backend emits.
pub fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "",
    }
}

/// Executes [`ApiRequest`]s against the backend.
///
/// The browser runtime is single threaded, so implementations are not
/// required to be `Send`.
#[async_trait(?Send)]
pub trait Backend {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// Sends `request` and decodes a successful JSON body, turning non-2xx
/// statuses into [`ClientError::Status`].
pub async fn fetch_json<T, B>(backend: &B, request: &ApiRequest) -> Result<T, ClientError>
where
    T: DeserializeOwned,
    B: Backend + ?Sized,
{
    let response = backend.send(request).await?;
    if !response.is_success() {
        return Err(ClientError::from_response(&response));
    }
    response.json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn court_writes_carry_fields_as_query() {
        let request = ApiRequest::update_cancha(5, "Cancha A", true);

        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.path, "/canchas/id/5");
        assert_eq!(request.query_value("nombre"), Some("Cancha A"));
        assert_eq!(request.query_value("techada"), Some("true"));
    }

    #[test]
    fn search_omits_unset_criteria() {
        let request = ApiRequest::search_reservas(&ReservaSearch {
            nom_cancha: Some("Cen*".into()),
            ..Default::default()
        });

        assert_eq!(request.to_string(), "GET /reservas/q/?nom_cancha=Cen*");
    }

    #[test]
    fn delete_path_uses_resource_segment() {
        assert_eq!(
            ApiRequest::delete(Resource::Reservas, 12).path,
            "/reservas/id/12/"
        );
        assert_eq!(ApiRequest::delete(Resource::Canchas, 3).path, "/canchas/id/3/");
    }

    #[test]
    fn url_joins_base_without_double_slash() {
        let request = ApiRequest::get_reserva(7, true);

        assert_eq!(
            request.url("http://localhost:8000/"),
            "http://localhost:8000/reservas/id/7/"
        );
        assert_eq!(request.query_value("full"), Some("true"));
    }

    #[test]
    fn resource_parses_route_parameter() {
        assert_eq!("canchas".parse::<Resource>(), Ok(Resource::Canchas));
        assert_eq!("reservas".parse::<Resource>(), Ok(Resource::Reservas));
        assert!("usuarios".parse::<Resource>().is_err());
    }

    #[test]
    fn status_error_keeps_backend_detail() {
        let response = ApiResponse {
            status: 404,
            status_text: "Not Found".into(),
            body: r#"{"detail":"No se encontró ninguna reserva con la ID: 4"}"#.into(),
        };

        match ClientError::from_response(&response) {
            ClientError::Status { status, detail, .. } => {
                assert_eq!(status, 404);
                assert_eq!(
                    detail.as_deref(),
                    Some("No se encontró ninguna reserva con la ID: 4")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn cause_appends_backend_detail() {
        let response = ApiResponse {
            status: 503,
            status_text: "Service Unavailable".into(),
            body: r#"{"detail":"base de datos caída"}"#.into(),
        };

        assert_eq!(
            ClientError::from_response(&response).cause(),
            "el servidor respondió 503 Service Unavailable: base de datos caída"
        );
        assert_eq!(
            ClientError::Transport("Failed to fetch".into()).cause(),
            "fallo de red: Failed to fetch"
        );
    }
}
