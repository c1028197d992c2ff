use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cancha::Cancha;

/// A timed booking against a court.
///
/// Field names follow the backend wire format, which uses accented keys for
/// the duration and phone fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserva {
    pub id: i64,
    pub id_cancha: i64,
    /// Booking day, serialized as `YYYY-MM-DD`.
    pub dia: NaiveDate,
    /// Starting hour, `0..=23`.
    pub hora: u8,
    #[serde(rename = "duración_minutos")]
    pub duracion_minutos: u32,
    #[serde(rename = "teléfono")]
    pub telefono: String,
    pub nombre_contacto: String,
}

/// A reservation joined with its court, returned by
/// `GET /reservas/id/{id}/?full=true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservaCompleta {
    pub reserva: Reserva,
    pub cancha: Cancha,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_keys() {
        let json = r#"{
            "id": 4,
            "id_cancha": 2,
            "dia": "2024-05-10",
            "hora": 18,
            "duración_minutos": 90,
            "teléfono": "1122334455",
            "nombre_contacto": "Lucía"
        }"#;

        let reserva: Reserva = serde_json::from_str(json).unwrap();

        assert_eq!(reserva.id_cancha, 2);
        assert_eq!(reserva.dia, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert_eq!(reserva.duracion_minutos, 90);
        assert_eq!(reserva.telefono, "1122334455");
    }

    #[test]
    fn decodes_full_reservation() {
        let json = r#"{
            "reserva": {
                "id": 1, "id_cancha": 3, "dia": "2024-01-02", "hora": 9,
                "duración_minutos": 60, "teléfono": "123", "nombre_contacto": "Ana"
            },
            "cancha": { "id": 3, "nombre": "Central", "techada": true }
        }"#;

        let completa: ReservaCompleta = serde_json::from_str(json).unwrap();

        assert_eq!(completa.cancha.nombre, "Central");
        assert_eq!(completa.reserva.id_cancha, completa.cancha.id);
    }
}
