//! Confirmation step before deleting a court or a reservation.
//!
//! Deleting a court cascades to its reservations, so the page first counts
//! them and only enables the delete button once the count is settled.

use crate::api::{fetch_json, ApiRequest, Backend, ClientError, ReservaSearch, Resource};
use crate::model::Reserva;
use crate::report::FormReport;

/// What is known about the reservations a deletion would take along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependents {
    /// Reservations have no dependents.
    NotApplicable,
    Loading,
    Known(usize),
    /// The lookup failed; deletion is still allowed.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub target: Resource,
    pub id: i64,
    dependents: Dependents,
}

impl DeleteConfirmation {
    pub fn new(target: Resource, id: i64) -> Self {
        let dependents = match target {
            Resource::Canchas => Dependents::Loading,
            Resource::Reservas => Dependents::NotApplicable,
        };
        Self {
            target,
            id,
            dependents,
        }
    }

    pub fn dependents(&self) -> Dependents {
        self.dependents
    }

    /// The lookup to run on mount, if any.
    pub fn dependents_request(&self) -> Option<ApiRequest> {
        match self.target {
            Resource::Canchas => Some(ApiRequest::search_reservas(&ReservaSearch {
                id_cancha: Some(self.id),
                ..Default::default()
            })),
            Resource::Reservas => None,
        }
    }

    pub fn set_dependents(&mut self, outcome: Result<usize, ClientError>) {
        self.dependents = match outcome {
            Ok(count) => Dependents::Known(count),
            Err(err) => {
                log::warn!("could not count reservations of court {}: {}", self.id, err);
                Dependents::Unknown
            }
        };
    }

    pub fn can_confirm(&self) -> bool {
        self.dependents != Dependents::Loading
    }

    /// Text of the cascade warning panel, when there is something to warn
    /// about.
    pub fn warning(&self) -> Option<String> {
        match self.dependents {
            Dependents::Known(0) | Dependents::NotApplicable | Dependents::Loading => None,
            Dependents::Known(1) => Some(
                "Esta cancha tiene 1 reserva registrada que también será eliminada.".to_string(),
            ),
            Dependents::Known(n) => Some(format!(
                "Esta cancha tiene {} reservas registradas que también serán eliminadas.",
                n
            )),
            Dependents::Unknown => {
                Some("No se pudieron consultar las reservas de esta cancha.".to_string())
            }
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Estás a punto de eliminar una {} de ID {}.",
            self.target.noun(),
            self.id
        )
    }

    /// Deletes the entity. The error report is meant to be shown on the
    /// confirmation page; on success the caller navigates away.
    pub async fn confirm<B: Backend + ?Sized>(&self, backend: &B) -> Result<(), FormReport> {
        let request = ApiRequest::delete(self.target, self.id);
        let failure = format!(
            "No se pudo eliminar la {} de ID {}.",
            self.target.noun(),
            self.id
        );

        log::info!("submitting {}", request);
        match backend.send(&request).await {
            Ok(response) if response.is_success() => Ok(()),
            Ok(response) => {
                log::warn!("{} failed with {} {}", request, response.status, response.status_text);
                Err(FormReport::error(failure, Some(&response)))
            }
            Err(err) => {
                log::error!("{} failed: {}", request, err);
                Err(FormReport::from_error(failure, &err))
            }
        }
    }
}

/// Counts the reservations a court deletion would remove.
pub async fn load_dependents<B: Backend + ?Sized>(
    backend: &B,
    confirmation: &DeleteConfirmation,
) -> Option<Result<usize, ClientError>> {
    let request = confirmation.dependents_request()?;
    Some(
        fetch_json::<Vec<Reserva>, _>(backend, &request)
            .await
            .map(|reservas| reservas.len()),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::api::Method;
    use crate::api::fake::RecordingBackend;

    fn reservas(n: i64) -> Value {
        Value::Array(
            (0..n)
                .map(|i| {
                    json!({
                        "id": i, "id_cancha": 4, "dia": "2024-05-10", "hora": 10,
                        "duración_minutos": 60, "teléfono": "1122334455", "nombre_contacto": "X"
                    })
                })
                .collect(),
        )
    }

    #[tokio::test]
    async fn court_with_reservations_warns_before_enabling_delete() {
        let backend = RecordingBackend::new().respond(200, reservas(3));
        let mut page = DeleteConfirmation::new(Resource::Canchas, 4);

        assert!(!page.can_confirm());
        assert_eq!(page.warning(), None);

        let outcome = load_dependents(&backend, &page).await.unwrap();
        page.set_dependents(outcome);

        let request = &backend.requests()[0];
        assert_eq!(request.path, "/reservas/q/");
        assert_eq!(request.query_value("id_cancha"), Some("4"));
        assert!(page.warning().unwrap().contains("3 reservas registradas"));
        assert!(page.can_confirm());
    }

    #[tokio::test]
    async fn reservations_skip_the_lookup() {
        let backend = RecordingBackend::new();
        let page = DeleteConfirmation::new(Resource::Reservas, 9);

        assert!(load_dependents(&backend, &page).await.is_none());
        assert!(page.can_confirm());
        assert!(backend.requests().is_empty());
        assert_eq!(page.summary(), "Estás a punto de eliminar una reserva de ID 9.");
    }

    #[tokio::test]
    async fn failed_lookup_still_allows_deleting() {
        let backend = RecordingBackend::new().fail("offline");
        let mut page = DeleteConfirmation::new(Resource::Canchas, 4);

        let outcome = load_dependents(&backend, &page).await.unwrap();
        page.set_dependents(outcome);

        assert_eq!(page.dependents(), Dependents::Unknown);
        assert!(page.can_confirm());
        assert!(page.warning().is_some());
    }

    #[tokio::test]
    async fn confirm_sends_delete() {
        let backend = RecordingBackend::new().respond(200, json!({ "id": 9 }));
        let page = DeleteConfirmation::new(Resource::Reservas, 9);

        assert!(page.confirm(&backend).await.is_ok());

        let request = &backend.requests()[0];
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.path, "/reservas/id/9/");
    }

    #[tokio::test]
    async fn failed_delete_reports_status() {
        let backend = RecordingBackend::new().respond(
            404,
            json!({ "detail": "No se encontró ninguna cancha con la ID: 4" }),
        );
        let page = DeleteConfirmation::new(Resource::Canchas, 4);

        let report = page.confirm(&backend).await.unwrap_err();

        assert_eq!(report.status(), Some(404));
        assert_eq!(report.desc, "No se pudo eliminar la cancha de ID 4.");
    }
}
