//! Asks before deleting a court or a reservation.

use common::api::{ClientError, Resource};
use common::pages::delete::{load_dependents, DeleteConfirmation};
use common::report::FormReport;
use common::route::Route;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::forms::{Button, ButtonKind, FormReportView};
use crate::components::helpers::{loading_indicator, show_toast};
use crate::components::layout::{Header, PageContent, Section};
use crate::context::AppContext;

#[derive(Properties, PartialEq, Clone)]
pub struct DeleteConfirmationProps {
    pub app: AppContext,
    pub target: Resource,
    pub id: i64,
}

pub enum Msg {
    DependentsLoaded(Result<usize, ClientError>),
    Confirm,
    Deleted(Result<(), FormReport>),
}

pub struct DeleteConfirmationPage {
    confirmation: DeleteConfirmation,
    report: Option<FormReport>,
    deleting: bool,
}

impl DeleteConfirmationPage {
    fn new(props: &DeleteConfirmationProps) -> Self {
        Self {
            confirmation: DeleteConfirmation::new(props.target, props.id),
            report: None,
            deleting: false,
        }
    }

    fn load(&self, ctx: &Context<Self>) {
        if self.confirmation.dependents_request().is_none() {
            return;
        }
        let confirmation = self.confirmation.clone();
        let backend = ctx.props().app.backend.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            if let Some(outcome) = load_dependents(&*backend, &confirmation).await {
                link.send_message(Msg::DependentsLoaded(outcome));
            }
        });
    }
}

impl Component for DeleteConfirmationPage {
    type Message = Msg;
    type Properties = DeleteConfirmationProps;

    fn create(ctx: &Context<Self>) -> Self {
        let page = Self::new(ctx.props());
        page.load(ctx);
        page
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.target != old_props.target || props.id != old_props.id {
            *self = Self::new(props);
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DependentsLoaded(outcome) => {
                self.confirmation.set_dependents(outcome);
                true
            }
            Msg::Confirm => {
                if self.deleting || !self.confirmation.can_confirm() {
                    return false;
                }
                self.deleting = true;
                let confirmation = self.confirmation.clone();
                let backend = ctx.props().app.backend.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Deleted(confirmation.confirm(&*backend).await));
                });
                true
            }
            Msg::Deleted(Ok(())) => {
                let noun = self.confirmation.target.noun();
                show_toast(&format!("Se eliminó la {} de ID {}.", noun, self.confirmation.id));
                ctx.props().app.navigate.emit(Route::Dashboard);
                false
            }
            Msg::Deleted(Err(report)) => {
                self.deleting = false;
                self.report = Some(report);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let app = &ctx.props().app;
        let confirmation = &self.confirmation;
        let noun = confirmation.target.noun();
        let capitalized = match confirmation.target {
            Resource::Canchas => "Cancha",
            Resource::Reservas => "Reserva",
        };

        let warning = match confirmation.warning() {
            Some(text) => html! { <div class="warning">{ text }</div> },
            None if !confirmation.can_confirm() => html! { <div class="warning">{ loading_indicator() }</div> },
            None => html! {},
        };

        html! {
            <PageContent theme={app.theme}>
                <Header app={app.clone()} title={AttrValue::from("Confirmar Eliminación")} />
                <main class="main">
                    <h2>{ "¿Estás seguro?" }</h2>
                    <h3>{ "Esta acción no puede deshacerse" }</h3>
                    <p>
                        { "Estás a punto de eliminar una " }
                        <b>{ noun }</b>
                        { format!(" de ID {}.", confirmation.id) }
                    </p>
                    { warning }
                    <FormReportView report={self.report.clone()} />
                    <Section row={true}>
                        <Button
                            kind={ButtonKind::Danger}
                            icon={"delete"}
                            disabled={self.deleting || !confirmation.can_confirm()}
                            onclick={ctx.link().callback(|_| Msg::Confirm)}
                        >
                            { format!("Eliminar {}", capitalized) }
                        </Button>
                        <Button icon={"close"} onclick={app.navigate.reform(|_| Route::Dashboard)}>
                            { "Cancelar" }
                        </Button>
                    </Section>
                </main>
            </PageContent>
        }
    }
}
