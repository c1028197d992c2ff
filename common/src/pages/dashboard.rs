//! Listings shown on the dashboard.
//!
//! The table builders take rows already converted to the renderer's value
//! type; [`CanchaCells`] and [`ReservaCells`] hold the text each column
//! shows so that the frontend only has to wrap them.

use crate::api::{fetch_json, Backend, ClientError};
use crate::dashboard::ReservaQuery;
use crate::format::{format_day, format_duration, format_hour, format_phone};
use crate::model::{Cancha, Reserva};
use crate::table::{ColumnStylePatch, Row, TableError, TabularData, Template};

pub const ACCIONES: &str = "Acciones";

pub const CANCHA_COLUMNS: [&str; 4] = ["ID", "Nombre", "Techada", ACCIONES];

pub const RESERVA_COLUMNS: [&str; 8] = [
    "ID", "IDC", "Día", "Hora", "Tiempo", "Contacto", "Teléfono", ACCIONES,
];

pub fn canchas_table<V>(
    rows: impl IntoIterator<Item = Row<V>>,
) -> Result<TabularData<V>, TableError> {
    Ok(TabularData::new(CANCHA_COLUMNS)?
        .set_column_styles([
            ("Nombre", ColumnStylePatch::template(Template::Auto)),
            (ACCIONES, ColumnStylePatch::template(Template::MaxContent)),
        ])
        .add_rows(rows))
}

pub fn reservas_table<V>(
    rows: impl IntoIterator<Item = Row<V>>,
) -> Result<TabularData<V>, TableError> {
    Ok(TabularData::new(RESERVA_COLUMNS)?
        .set_column_styles([
            ("Día", ColumnStylePatch::template(Template::MaxContent)),
            ("Contacto", ColumnStylePatch::template(Template::Auto)),
            ("Teléfono", ColumnStylePatch::template(Template::MaxContent)),
            (ACCIONES, ColumnStylePatch::template(Template::MaxContent)),
        ])
        .add_rows(rows))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanchaCells {
    pub id: i64,
    pub nombre: String,
    pub techada: bool,
}

impl From<&Cancha> for CanchaCells {
    fn from(cancha: &Cancha) -> Self {
        Self {
            id: cancha.id,
            nombre: cancha.nombre.clone(),
            techada: cancha.techada,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservaCells {
    pub id: i64,
    pub id_cancha: i64,
    pub dia: String,
    pub hora: String,
    pub tiempo: String,
    pub contacto: String,
    pub telefono: String,
}

impl From<&Reserva> for ReservaCells {
    fn from(reserva: &Reserva) -> Self {
        Self {
            id: reserva.id,
            id_cancha: reserva.id_cancha,
            dia: format_day(&reserva.dia),
            hora: format_hour(reserva.hora),
            tiempo: format_duration(reserva.duracion_minutos),
            contacto: reserva.nombre_contacto.clone(),
            telefono: format_phone(&reserva.telefono),
        }
    }
}

pub async fn load_reservas<B: Backend + ?Sized>(
    backend: &B,
    query: &ReservaQuery,
) -> Result<Vec<Reserva>, ClientError> {
    let reservas: Vec<Reserva> = fetch_json(backend, &query.request()).await?;
    log::debug!("loaded {} reservations for {:?}", reservas.len(), query);
    Ok(reservas)
}
