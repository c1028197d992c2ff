//! Dashboard: court listing plus the reservation listing with its
//! debounced filters.
//!
//! Split like the other stateful pages:
//! - `state`: component state and the fetch helpers.
//! - `messages`: the `Msg` enum.
//! - `update`: message handling, including the filter timers.
//! - `view`: tables and filter form.

use yew::prelude::*;

use crate::context::AppContext;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::Dashboard;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    pub app: AppContext,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Dashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            self.fetch_canchas(ctx);
            self.fetch_reservas(ctx);
        }
    }
}
