//! Court registration page; with an id it edits that court instead.

use common::api::ClientError;
use common::model::Cancha;
use common::pages::canchas::{load_cancha, CanchaForm, NOMBRE};
use common::pages::Reported;
use common::report::FormReport;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::forms::{Button, ButtonKind, FieldInput, FormReportView, Toggle};
use crate::components::helpers::loading_indicator;
use crate::components::layout::{Header, NavPage, PageContent, Section};
use crate::context::AppContext;

#[derive(Properties, PartialEq, Clone)]
pub struct CanchasProps {
    pub app: AppContext,
    #[prop_or_default]
    pub edit_id: Option<i64>,
}

pub enum Msg {
    Loaded(Result<Cancha, ClientError>),
    SetNombre(String),
    SetTechada(bool),
    Submit,
    Submitted(FormReport),
}

pub struct CanchasPage {
    form: Reported<CanchaForm>,
    /// The court being edited, once loaded.
    cancha: Option<Cancha>,
    submitting: bool,
}

impl CanchasPage {
    fn new(edit_id: Option<i64>) -> Self {
        Self {
            form: Reported::new(CanchaForm::new(edit_id)),
            cancha: None,
            submitting: false,
        }
    }

    fn load(&self, ctx: &Context<Self>) {
        let Some(id) = self.form.edit_id else {
            return;
        };
        let backend = ctx.props().app.backend.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(load_cancha(&*backend, id).await));
        });
    }

    fn loading(&self) -> bool {
        self.form.modifies() && self.cancha.is_none()
    }
}

impl Component for CanchasPage {
    type Message = Msg;
    type Properties = CanchasProps;

    fn create(ctx: &Context<Self>) -> Self {
        let page = Self::new(ctx.props().edit_id);
        page.load(ctx);
        page
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().edit_id != old_props.edit_id {
            *self = Self::new(ctx.props().edit_id);
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(cancha)) => {
                self.form.edit().fill(&cancha);
                self.cancha = Some(cancha);
                true
            }
            Msg::Loaded(Err(e)) => {
                log::error!("No se pudo recuperar la cancha desde la API: {}", e);
                false
            }
            Msg::SetNombre(nombre) => {
                self.form.edit().nombre = nombre;
                true
            }
            Msg::SetTechada(techada) => {
                self.form.edit().techada = techada;
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                self.submitting = true;
                let form = CanchaForm::clone(&self.form);
                let backend = ctx.props().app.backend.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Submitted(form.submit(&*backend).await));
                });
                true
            }
            Msg::Submitted(report) => {
                self.submitting = false;
                self.form.record(report, |form, report| form.settle(report));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let app = &ctx.props().app;
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        let (selected, title) = if self.form.modifies() {
            (None, Some(AttrValue::from("Modificar Cancha")))
        } else {
            (Some(NavPage::Canchas), None)
        };

        let intro = match self.form.edit_id {
            None => html! {
                <>
                    <h2>{ "Registra una Cancha" }</h2>
                    <p>{ "Puedes modificarla o darla de baja cuando desees en la " }<b>{ "Dashboard" }</b>{ "." }</p>
                </>
            },
            Some(id) => html! {
                <>
                    <h2>{ "Modifica una Cancha" }</h2>
                    <p>
                        { "Estás a punto de modificar la cancha " }
                        {
                            match &self.cancha {
                                Some(cancha) => html! { <b>{ format!("\"{}\"", cancha.nombre) }</b> },
                                None => loading_indicator(),
                            }
                        }
                        { format!(", cuya ID es {}.", id) }
                    </p>
                </>
            },
        };

        let body = if self.loading() {
            html! { <Section class="pulse">{ loading_indicator() }</Section> }
        } else {
            html! {
                <Section>
                    <form class="form" {onsubmit}>
                        <FieldInput
                            field={NOMBRE}
                            value={self.form.nombre.clone()}
                            on_change={link.callback(Msg::SetNombre)}
                        />
                        <Toggle
                            id="techada"
                            label="Techada"
                            checked={self.form.techada}
                            on_change={link.callback(Msg::SetTechada)}
                        />
                        <FormReportView report={self.form.report().cloned()} />
                        <Button submit={true} kind={ButtonKind::Primary} disabled={self.submitting}>
                            { if self.form.modifies() { "Modificar" } else { "Registrar" } }
                        </Button>
                    </form>
                </Section>
            }
        };

        html! {
            <PageContent theme={app.theme}>
                <Header app={app.clone()} {selected} {title} />
                <main class="main">
                    { intro }
                    { body }
                </main>
            </PageContent>
        }
    }
}
