//! Reservation booking and edition.

use crate::api::{fetch_json, ApiRequest, Backend, ClientError, ReservaFields};
use crate::form::{Field, ValidationError};
use crate::format::format_phone;
use crate::model::{Cancha, Reserva, ReservaCompleta};
use crate::report::FormReport;

use super::submit_entity;

/// Longest bookable slot, in minutes.
pub const MAX_DURATION_MINUTES: i64 = 60 * 8;

pub const DIA: Field = Field::date("dia", "Día").required();
pub const HORA: Field = Field::number("hora", "Hora", 0, 23).required();
pub const DURACION: Field =
    Field::number("duracion", "Duración (mins.)", 1, MAX_DURATION_MINUTES).required();
pub const TELEFONO: Field = Field::tel("telefono", "Teléfono").required();
pub const CONTACTO: Field = Field::text("contacto", "Nombre de contacto").required();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservaForm {
    pub edit_id: Option<i64>,
    pub id_cancha: Option<i64>,
    pub dia: String,
    pub hora: String,
    pub dur_mins: String,
    pub tel: String,
    pub nom_contacto: String,
}

impl ReservaForm {
    /// An empty form. `today` (`YYYY-MM-DD`) preselects the day of a new
    /// booking.
    pub fn new(edit_id: Option<i64>, today: &str) -> Self {
        Self {
            edit_id,
            id_cancha: None,
            dia: today.to_string(),
            hora: "0".to_string(),
            dur_mins: "60".to_string(),
            tel: String::new(),
            nom_contacto: String::new(),
        }
    }

    pub fn modifies(&self) -> bool {
        self.edit_id.is_some()
    }

    pub fn fill(&mut self, reserva: &Reserva) {
        self.id_cancha = Some(reserva.id_cancha);
        self.dia = reserva.dia.format("%Y-%m-%d").to_string();
        self.hora = reserva.hora.to_string();
        self.dur_mins = reserva.duracion_minutos.to_string();
        self.tel = format_phone(&reserva.telefono);
        self.nom_contacto = reserva.nombre_contacto.clone();
    }

    /// Preselects the first court when none is chosen yet.
    pub fn default_court(&mut self, canchas: &[Cancha]) {
        if self.id_cancha.is_none() {
            self.id_cancha = canchas.first().map(|c| c.id);
        }
    }

    pub fn reset(&mut self, today: &str) {
        *self = Self {
            id_cancha: self.id_cancha,
            ..Self::new(None, today)
        };
    }

    /// Checks every field and collects the query parameters.
    pub fn fields(&self) -> Result<ReservaFields, ValidationError> {
        DIA.validate(&self.dia)?;
        HORA.validate(&self.hora)?;
        DURACION.validate(&self.dur_mins)?;
        TELEFONO.validate(&self.tel)?;
        CONTACTO.validate(&self.nom_contacto)?;

        let int = |field: &Field, value: &str| {
            value.trim().parse::<i64>().map_err(|_| ValidationError::Missing(field.label))
        };

        Ok(ReservaFields {
            dia: self.dia.trim().to_string(),
            hora: int(&HORA, &self.hora)?,
            dur_mins: int(&DURACION, &self.dur_mins)?,
            tel: format_phone(&self.tel),
            nom_contacto: self.nom_contacto.trim().to_string(),
        })
    }

    pub fn request(&self) -> Result<ApiRequest, ValidationError> {
        let fields = self.fields()?;
        match (self.edit_id, self.id_cancha) {
            (Some(id), _) => Ok(ApiRequest::update_reserva(id, &fields)),
            (None, Some(id_cancha)) => Ok(ApiRequest::create_reserva(id_cancha, &fields)),
            (None, None) => Err(ValidationError::Missing("Cancha")),
        }
    }

    /// Validates and submits. Invalid forms are answered with a local
    /// `400 Bad Request` report and never reach the backend.
    pub async fn submit<B: Backend + ?Sized>(&self, backend: &B) -> FormReport {
        let (done, doing) = if self.modifies() {
            ("modificó", "modificar")
        } else {
            ("registró", "registrar")
        };

        let request = match self.request() {
            Ok(request) => request,
            Err(err) => {
                log::warn!("reservation form rejected: {}", err);
                return FormReport::rejected(
                    format!("No se pudo {} la reserva: revisa los datos ingresados.", doing),
                    err.to_string(),
                );
            }
        };

        submit_entity(
            backend,
            &request,
            |reserva: &Reserva| {
                format!(
                    "Se {} la reserva de ID {} para el día {} a las {}:00.",
                    done, reserva.id, reserva.dia, reserva.hora
                )
            },
            format!("Ocurrió un error de servidor al intentar {} la reserva.", doing),
        )
        .await
    }

    pub fn settle(&mut self, report: &FormReport, today: &str) {
        if report.is_success() && !self.modifies() {
            self.reset(today);
        }
    }
}

pub async fn load_reserva<B: Backend + ?Sized>(
    backend: &B,
    id: i64,
) -> Result<ReservaCompleta, ClientError> {
    fetch_json(backend, &ApiRequest::get_reserva(id, true)).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::Method;
    use crate::api::fake::RecordingBackend;
    use crate::report::ReportKind;

    fn filled() -> ReservaForm {
        ReservaForm {
            id_cancha: Some(2),
            hora: "18".into(),
            dur_mins: "90".into(),
            tel: "11 2233 4455".into(),
            nom_contacto: "Lucía".into(),
            ..ReservaForm::new(None, "2024-05-10")
        }
    }

    fn echoed(id: i64) -> serde_json::Value {
        json!({
            "id": id, "id_cancha": 2, "dia": "2024-05-10", "hora": 18,
            "duración_minutos": 90, "teléfono": "112 233-4455", "nombre_contacto": "Lucía"
        })
    }

    #[tokio::test]
    async fn invalid_phone_is_rejected_without_a_request() {
        let backend = RecordingBackend::new();
        let form = ReservaForm {
            tel: "12345".into(),
            ..filled()
        };

        let report = form.submit(&backend).await;

        assert_eq!(report.kind, ReportKind::Error);
        assert_eq!(report.status(), Some(400));
        assert!(!format_phone(&form.tel).contains('-'));
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn booking_posts_under_the_court() {
        let backend = RecordingBackend::new().respond(201, echoed(11));
        let mut form = filled();

        let report = form.submit(&backend).await;

        let request = &backend.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/reservas/cancha/2/");
        assert_eq!(request.query_value("dia"), Some("2024-05-10"));
        assert_eq!(request.query_value("hora"), Some("18"));
        assert_eq!(request.query_value("dur_mins"), Some("90"));
        assert_eq!(request.query_value("tel"), Some("112 233-4455"));
        assert_eq!(request.query_value("nom_contacto"), Some("Lucía"));

        assert!(report.is_success());
        assert!(report.desc.contains("ID 11"));

        form.settle(&report, "2024-05-11");
        assert_eq!(form.tel, "");
        assert_eq!(form.dia, "2024-05-11");
        assert_eq!(form.id_cancha, Some(2));
    }

    #[tokio::test]
    async fn editing_patches_the_reservation() {
        let backend = RecordingBackend::new().respond(200, echoed(4));
        let form = ReservaForm {
            edit_id: Some(4),
            ..filled()
        };

        let report = form.submit(&backend).await;

        assert_eq!(backend.requests()[0].method, Method::Patch);
        assert_eq!(backend.requests()[0].path, "/reservas/id/4/");
        assert!(report.desc.starts_with("Se modificó la reserva de ID 4"));
    }

    #[tokio::test]
    async fn missing_court_is_rejected() {
        let backend = RecordingBackend::new();
        let form = ReservaForm {
            id_cancha: None,
            ..filled()
        };

        let report = form.submit(&backend).await;

        assert_eq!(report.status(), Some(400));
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn unknown_court_reports_backend_detail() {
        let backend = RecordingBackend::new().respond(
            404,
            json!({ "detail": "No se encontró ninguna cancha con la ID: 2, al intentar realizar una reserva" }),
        );

        let report = filled().submit(&backend).await;

        let summary = report.response.unwrap();
        assert_eq!(summary.status, 404);
        assert!(summary.detail.unwrap().starts_with("No se encontró"));
    }

    #[test]
    fn range_checks_apply_before_sending() {
        let form = ReservaForm {
            hora: "24".into(),
            ..filled()
        };
        assert!(matches!(form.fields(), Err(ValidationError::OutOfRange { .. })));

        let form = ReservaForm {
            dur_mins: "0".into(),
            ..filled()
        };
        assert!(form.fields().is_err());
    }

    #[tokio::test]
    async fn loading_for_edit_uses_the_joined_view() {
        let backend = RecordingBackend::new().respond(
            200,
            json!({ "reserva": echoed(4), "cancha": { "id": 2, "nombre": "Central", "techada": false } }),
        );
        let mut form = ReservaForm::new(Some(4), "2024-01-01");

        let completa = load_reserva(&backend, 4).await.unwrap();
        form.fill(&completa.reserva);

        assert_eq!(backend.requests()[0].query_value("full"), Some("true"));
        assert_eq!(completa.cancha.nombre, "Central");
        assert_eq!(form.dia, "2024-05-10");
        assert_eq!(form.hora, "18");
        assert_eq!(form.id_cancha, Some(2));
    }

    #[test]
    fn first_court_is_preselected() {
        let mut form = ReservaForm::new(None, "2024-01-01");
        let canchas = vec![
            Cancha { id: 5, nombre: "A".into(), techada: false },
            Cancha { id: 6, nombre: "B".into(), techada: true },
        ];

        form.default_court(&canchas);
        assert_eq!(form.id_cancha, Some(5));

        form.id_cancha = Some(6);
        form.default_court(&canchas);
        assert_eq!(form.id_cancha, Some(6));
    }
}
