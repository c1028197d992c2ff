//! Page controllers.
//!
//! Each page owns plain form state and exposes async operations over a
//! [`Backend`]. Operations take `&self` and return results instead of
//! mutating, because the UI runs them in a spawned task and applies the
//! outcome when it arrives.

pub mod canchas;
pub mod dashboard;
pub mod delete;
pub mod reservas;

use std::ops::Deref;

use serde::de::DeserializeOwned;

use crate::api::{ApiRequest, Backend};
use crate::report::FormReport;

/// A form paired with the report of its last submission.
///
/// The report stays on screen until the next edit: every mutation goes
/// through [`Reported::edit`], which dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reported<F> {
    form: F,
    report: Option<FormReport>,
}

impl<F> Reported<F> {
    pub fn new(form: F) -> Self {
        Self { form, report: None }
    }

    pub fn report(&self) -> Option<&FormReport> {
        self.report.as_ref()
    }

    pub fn edit(&mut self) -> &mut F {
        self.report = None;
        &mut self.form
    }

    /// Lets `settle` apply the outcome to the form, then shows it.
    pub fn record(&mut self, report: FormReport, settle: impl FnOnce(&mut F, &FormReport)) {
        settle(&mut self.form, &report);
        self.report = Some(report);
    }
}

impl<F> Deref for Reported<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.form
    }
}

/// Sends a create/update request and summarizes the outcome.
///
/// `describe` builds the success text from the entity echoed by the
/// backend; `failure` is used for every kind of failure.
pub(crate) async fn submit_entity<T, B>(
    backend: &B,
    request: &ApiRequest,
    describe: impl FnOnce(&T) -> String,
    failure: String,
) -> FormReport
where
    T: DeserializeOwned,
    B: Backend + ?Sized,
{
    log::info!("submitting {}", request);
    match backend.send(request).await {
        Ok(response) if response.is_success() => match response.json::<T>() {
            Ok(entity) => FormReport::success(describe(&entity), &response),
            Err(err) => {
                log::error!("{} returned an unreadable body: {}", request, err);
                FormReport::error(failure, Some(&response))
            }
        },
        Ok(response) => {
            log::warn!("{} failed with {} {}", request, response.status, response.status_text);
            FormReport::error(failure, Some(&response))
        }
        Err(err) => {
            log::error!("{} failed: {}", request, err);
            FormReport::from_error(failure, &err)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::canchas::CanchaForm;
    use super::reservas::ReservaForm;
    use super::*;
    use crate::api::fake::RecordingBackend;
    use crate::report::ReportKind;

    #[tokio::test]
    async fn the_next_edit_dismisses_the_report() {
        let backend = RecordingBackend::new()
            .respond(201, json!({ "id": 7, "nombre": "Cancha A", "techada": true }));
        let mut state = Reported::new(CanchaForm {
            nombre: "Cancha A".into(),
            techada: true,
            ..Default::default()
        });

        let report = state.submit(&backend).await;
        state.record(report, |form, report| form.settle(report));

        assert_eq!(state.report().map(|r| r.kind), Some(ReportKind::Success));
        assert_eq!(state.nombre, "");

        state.edit().nombre = "Cancha B".into();

        assert_eq!(state.report(), None);
        assert_eq!(state.nombre, "Cancha B");
    }

    #[tokio::test]
    async fn a_rejected_booking_clears_once_the_phone_changes() {
        let backend = RecordingBackend::new();
        let mut state = Reported::new(ReservaForm {
            id_cancha: Some(1),
            tel: "12345".into(),
            nom_contacto: "Ana".into(),
            ..ReservaForm::new(None, "2024-05-10")
        });

        let report = state.submit(&backend).await;
        state.record(report, |form, report| form.settle(report, "2024-05-10"));

        assert_eq!(state.report().and_then(|r| r.status()), Some(400));
        assert_eq!(state.tel, "12345");

        state.edit().tel = "1122334455".into();

        assert!(state.report().is_none());
    }
}
