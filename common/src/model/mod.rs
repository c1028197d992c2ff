pub mod cancha;
pub mod errors;
pub mod reserva;

pub use cancha::Cancha;
pub use errors::{ErrorBody, ErrorDetail, ValidationDetail};
pub use reserva::{Reserva, ReservaCompleta};
