//! Court registration and edition.

use crate::api::{fetch_json, ApiRequest, Backend, ClientError};
use crate::form::Field;
use crate::model::Cancha;
use crate::report::FormReport;

use super::submit_entity;

pub const NOMBRE: Field = Field::text("nombre", "Nombre").required();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanchaForm {
    /// Present when editing an existing court.
    pub edit_id: Option<i64>,
    pub nombre: String,
    pub techada: bool,
}

impl CanchaForm {
    pub fn new(edit_id: Option<i64>) -> Self {
        Self {
            edit_id,
            ..Default::default()
        }
    }

    pub fn modifies(&self) -> bool {
        self.edit_id.is_some()
    }

    pub fn fill(&mut self, cancha: &Cancha) {
        self.nombre = cancha.nombre.clone();
        self.techada = cancha.techada;
    }

    pub fn reset(&mut self) {
        self.nombre.clear();
        self.techada = false;
    }

    pub fn request(&self) -> ApiRequest {
        match self.edit_id {
            Some(id) => ApiRequest::update_cancha(id, &self.nombre, self.techada),
            None => ApiRequest::create_cancha(&self.nombre, self.techada),
        }
    }

    pub async fn submit<B: Backend + ?Sized>(&self, backend: &B) -> FormReport {
        let (done, doing) = if self.modifies() {
            ("modificó", "modificar")
        } else {
            ("registró", "registrar")
        };

        if let Err(err) = NOMBRE.validate(&self.nombre) {
            return FormReport::rejected(
                format!("No se pudo {} la cancha.", doing),
                err.to_string(),
            );
        }

        submit_entity(
            backend,
            &self.request(),
            |cancha: &Cancha| {
                format!("Se {} la cancha \"{}\" de ID {}.", done, cancha.nombre, cancha.id)
            },
            format!("Ocurrió un error de servidor al intentar {} la cancha.", doing),
        )
        .await
    }

    /// Applies a submit outcome: a successful registration clears the form,
    /// an edition keeps its values.
    pub fn settle(&mut self, report: &FormReport) {
        if report.is_success() && !self.modifies() {
            self.reset();
        }
    }
}

pub async fn load_cancha<B: Backend + ?Sized>(backend: &B, id: i64) -> Result<Cancha, ClientError> {
    fetch_json(backend, &ApiRequest::get_cancha(id)).await
}

pub async fn load_canchas<B: Backend + ?Sized>(backend: &B) -> Result<Vec<Cancha>, ClientError> {
    fetch_json(backend, &ApiRequest::list_canchas()).await
}
