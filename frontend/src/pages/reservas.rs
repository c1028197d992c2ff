//! Reservation booking page; with an id it edits that reservation.

use common::api::ClientError;
use common::model::{Cancha, ReservaCompleta};
use common::pages::canchas::load_canchas;
use common::pages::Reported;
use common::pages::reservas::{load_reserva, ReservaForm, CONTACTO, DIA, DURACION, HORA, TELEFONO};
use common::report::FormReport;
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::forms::{Button, ButtonKind, FieldInput, FormReportView};
use crate::components::helpers::loading_indicator;
use crate::components::layout::{Header, NavPage, PageContent, Section};
use crate::context::AppContext;

#[derive(Properties, PartialEq, Clone)]
pub struct ReservasProps {
    pub app: AppContext,
    #[prop_or_default]
    pub edit_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Dia,
    Hora,
    Duracion,
    Telefono,
    Contacto,
}

pub enum Msg {
    CanchasLoaded(Result<Vec<Cancha>, ClientError>),
    Loaded(Result<ReservaCompleta, ClientError>),
    SetCourt(Option<i64>),
    Set(Input, String),
    Submit,
    Submitted(FormReport),
}

pub struct ReservasPage {
    form: Reported<ReservaForm>,
    canchas: Option<Vec<Cancha>>,
    /// The reservation being edited, once loaded.
    editing: Option<ReservaCompleta>,
    submitting: bool,
}

/// Today's date as `YYYY-MM-DD`, in UTC like the date inputs' defaults.
fn today() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.chars().take(10).collect()
}

impl ReservasPage {
    fn new(edit_id: Option<i64>) -> Self {
        Self {
            form: Reported::new(ReservaForm::new(edit_id, &today())),
            canchas: None,
            editing: None,
            submitting: false,
        }
    }

    fn load(&self, ctx: &Context<Self>) {
        let backend = ctx.props().app.backend.clone();
        let link = ctx.link().clone();
        let edit_id = self.form.edit_id;
        spawn_local(async move {
            link.send_message(Msg::CanchasLoaded(load_canchas(&*backend).await));
            if let Some(id) = edit_id {
                link.send_message(Msg::Loaded(load_reserva(&*backend, id).await));
            }
        });
    }

    fn loading(&self) -> bool {
        self.canchas.is_none() || (self.form.modifies() && self.editing.is_none())
    }

    fn court_select(&self, ctx: &Context<Self>) -> Html {
        let onchange = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::SetCourt(select.value().parse().ok())
        });
        let selected = self.form.id_cancha;

        html! {
            <div class="field">
                <label for="cancha">{ "Cancha" }</label>
                <select id="cancha" required={true} {onchange}>
                    {
                        for self.canchas.iter().flatten().map(|cancha| html! {
                            <option
                                value={cancha.id.to_string()}
                                selected={selected == Some(cancha.id)}
                            >
                                { format!("{} (ID {})", cancha.nombre, cancha.id) }
                            </option>
                        })
                    }
                </select>
            </div>
        }
    }
}

impl Component for ReservasPage {
    type Message = Msg;
    type Properties = ReservasProps;

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
            Msg::CanchasLoaded(Ok(canchas)) => {
                self.form.edit().default_court(&canchas);
                self.canchas = Some(canchas);
                true
            }
            Msg::CanchasLoaded(Err(e)) => {
                log::error!("No se pudieron recuperar las canchas desde la API: {}", e);
                false
            }
            Msg::Loaded(Ok(completa)) => {
                self.form.edit().fill(&completa.reserva);
                self.editing = Some(completa);
                true
            }
            Msg::Loaded(Err(e)) => {
                log::error!("No se pudo recuperar la reserva desde la API: {}", e);
                false
            }
            Msg::SetCourt(id_cancha) => {
                self.form.edit().id_cancha = id_cancha;
                true
            }
            Msg::Set(input, value) => {
                let form = self.form.edit();
                let slot = match input {
                    Input::Dia => &mut form.dia,
                    Input::Hora => &mut form.hora,
                    Input::Duracion => &mut form.dur_mins,
                    Input::Telefono => &mut form.tel,
                    Input::Contacto => &mut form.nom_contacto,
                };
                *slot = value;
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                self.submitting = true;
                let form = ReservaForm::clone(&self.form);
                let backend = ctx.props().app.backend.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Submitted(form.submit(&*backend).await));
                });
                true
            }
            Msg::Submitted(report) => {
                self.submitting = false;
                let today = today();
                self.form.record(report, |form, report| form.settle(report, &today));
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
        let set = |input: Input| link.callback(move |value: String| Msg::Set(input, value));

        let (selected, title) = if self.form.modifies() {
            (None, Some(AttrValue::from("Modificar Reserva")))
        } else {
            (Some(NavPage::Reservas), None)
        };

        let intro = match &self.editing {
            Some(completa) => html! {
                <>
                    <h2>{ "Modifica una Reserva" }</h2>
                    <p>
                        { format!("Estás a punto de modificar la reserva de ID {} en la cancha ", completa.reserva.id) }
                        <b>{ format!("\"{}\"", completa.cancha.nombre) }</b>
                        { "." }
                    </p>
                </>
            },
            None if self.form.modifies() => html! { <h2>{ "Modifica una Reserva" }</h2> },
            None => html! {
                <>
                    <h2>{ "Realiza una Reserva" }</h2>
                    <p>{ "Puedes modificarla o cancelarla cuando quieras en la " }<b>{ "Dashboard" }</b>{ "." }</p>
                </>
            },
        };

        let body = if self.loading() {
            html! { <Section class="pulse">{ loading_indicator() }</Section> }
        } else {
            html! {
                <Section>
                    <form class="form" {onsubmit}>
                        { self.court_select(ctx) }
                        <FieldInput field={DIA} value={self.form.dia.clone()} on_change={set(Input::Dia)} />
                        <FieldInput field={HORA} value={self.form.hora.clone()} on_change={set(Input::Hora)} />
                        <FieldInput field={DURACION} value={self.form.dur_mins.clone()} on_change={set(Input::Duracion)} />
                        <FieldInput field={TELEFONO} value={self.form.tel.clone()} on_change={set(Input::Telefono)} />
                        <FieldInput field={CONTACTO} value={self.form.nom_contacto.clone()} on_change={set(Input::Contacto)} />
                        <FormReportView report={self.form.report().cloned()} />
                        <Button submit={true} kind={ButtonKind::Primary} disabled={self.submitting}>
                            { if self.form.modifies() { "Modificar" } else { "Reservar" } }
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
