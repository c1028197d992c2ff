use common::dashboard::ReservaFilters;
use common::model::{Cancha, Reserva};
use common::pages::canchas::load_canchas;
use common::pages::dashboard::load_reservas;
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::adapters::TimeoutScheduler;

use super::messages::Msg;

pub struct Dashboard {
    pub canchas: Vec<Cancha>,
    pub canchas_loading: bool,
    pub reservas: Vec<Reserva>,
    pub reservas_loading: bool,
    pub filters: ReservaFilters<Timeout>,
    pub scheduler: TimeoutScheduler,
    /// Guards the initial fetch.
    pub loaded: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            canchas: Vec::new(),
            canchas_loading: true,
            reservas: Vec::new(),
            reservas_loading: true,
            filters: ReservaFilters::new(),
            scheduler: TimeoutScheduler,
            loaded: false,
        }
    }

    pub fn fetch_canchas(&self, ctx: &Context<Self>) {
        let backend = ctx.props().app.backend.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = load_canchas(&*backend).await;
            link.send_message(Msg::CanchasLoaded(result));
        });
    }

    /// Fetches the listing selected by the committed filters.
    pub fn fetch_reservas(&self, ctx: &Context<Self>) {
        let backend = ctx.props().app.backend.clone();
        let link = ctx.link().clone();
        let query = self.filters.query();
        spawn_local(async move {
            let result = load_reservas(&*backend, &query).await;
            link.send_message(Msg::ReservasLoaded(result));
        });
    }
}
