use common::api::ClientError;
use common::dashboard::FilterTick;
use common::model::{Cancha, Reserva};

pub enum Msg {
    CanchasLoaded(Result<Vec<Cancha>, ClientError>),
    ReservasLoaded(Result<Vec<Reserva>, ClientError>),
    SetCourtName(String),
    SetDay(String),
    SetDayMax(String),
    FilterFired(FilterTick),
}
