use yew::prelude::*;

use super::messages::Msg;
use super::state::Dashboard;

pub fn update(component: &mut Dashboard, ctx: &Context<Dashboard>, msg: Msg) -> bool {
    let notify = {
        let link = ctx.link().clone();
        move |tick| link.send_message(Msg::FilterFired(tick))
    };

    match msg {
        Msg::CanchasLoaded(Ok(canchas)) => {
            component.canchas = canchas;
            component.canchas_loading = false;
            true
        }
        Msg::CanchasLoaded(Err(e)) => {
            log::error!("No se pudieron recuperar las canchas desde la API: {}", e);
            false
        }
        Msg::ReservasLoaded(Ok(reservas)) => {
            component.reservas = reservas;
            component.reservas_loading = false;
            true
        }
        Msg::ReservasLoaded(Err(e)) => {
            log::error!("No se pudieron recuperar las reservas desde la API: {}", e);
            false
        }
        Msg::SetCourtName(value) => {
            component
                .filters
                .set_court_name(value, &component.scheduler, notify);
            true
        }
        Msg::SetDay(value) => {
            component.filters.set_day(value, &component.scheduler, notify);
            true
        }
        Msg::SetDayMax(value) => {
            component
                .filters
                .set_day_max(value, &component.scheduler, notify);
            true
        }
        Msg::FilterFired(tick) => {
            if component.filters.expire(tick) {
                component.fetch_reservas(ctx);
            }
            false
        }
    }
}
