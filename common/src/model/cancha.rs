use serde::{Deserialize, Serialize};

/// A bookable court as the backend serializes it.
///
/// The front end only ever holds a fetch-refreshed copy: courts are created
/// through `POST /canchas/`, edited through `PATCH /canchas/id/{id}` and
/// removed from the delete confirmation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cancha {
    pub id: i64,
    pub nombre: String,
    /// Whether the court is covered.
    pub techada: bool,
}
