use common::api::Resource;
use common::form::Field;
use common::model::{Cancha, Reserva};
use common::pages::dashboard::{
    canchas_table, reservas_table, CanchaCells, ReservaCells, ACCIONES,
};
use common::route::Route;
use common::table::{Row, TableError, TabularData};
use yew::prelude::*;

use crate::components::forms::{Button, ButtonKind, FieldInput};
use crate::components::helpers::icon;
use crate::components::layout::{Header, NavPage, PageContent, Section};
use crate::components::presentation::Table;
use crate::context::AppContext;

use super::messages::Msg;
use super::state::Dashboard;

const COURT_FILTER: Field = Field::text("filtroNombreCancha", "Nombre de cancha");
const DAY_FILTER: Field = Field::date("filtroDia", "Día de reserva");
const DAY_MAX_FILTER: Field = Field::date("filtroDiaMax", "(máx.)");

pub fn view(component: &Dashboard, ctx: &Context<Dashboard>) -> Html {
    let app = &ctx.props().app;
    let link = ctx.link();

    html! {
        <PageContent theme={app.theme}>
            <Header app={app.clone()} selected={NavPage::Home} />
            <main class="main">
                <h2>{ "Dashboard" }</h2>
                <p class="subtitle">{ "Panel de Control de Canchas y Reservas" }</p>

                <h3>{ "Canchas" }</h3>
                <Section>
                    { table_or_error(
                        canchas_table(component.canchas.iter().map(|c| cancha_row(app, c))),
                        component.canchas_loading,
                    ) }
                </Section>

                <h3>{ "Reservas" }</h3>
                <p>{ "Puedes usar los filtros a continuación para refinar tus resultados" }</p>
                <Section class="filters">
                    <form class="filter-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                        <div class="filter-name">
                            <FieldInput
                                field={COURT_FILTER}
                                label={filter_label(COURT_FILTER.label)}
                                value={component.filters.court_name().to_string()}
                                on_change={link.callback(Msg::SetCourtName)}
                            />
                            <sup class="hint">
                                { "Utiliza un comodín \"*\" para buscar coincidencias parciales" }
                            </sup>
                        </div>
                        <div class="filter-days">
                            <FieldInput
                                field={DAY_FILTER}
                                label={filter_label(DAY_FILTER.label)}
                                value={component.filters.days().low.clone()}
                                on_change={link.callback(Msg::SetDay)}
                            />
                            <FieldInput
                                field={DAY_MAX_FILTER}
                                value={component.filters.days().high.clone()}
                                on_change={link.callback(Msg::SetDayMax)}
                            />
                        </div>
                    </form>
                </Section>
                <Section>
                    { table_or_error(
                        reservas_table(component.reservas.iter().map(|r| reserva_row(app, r))),
                        component.reservas_loading,
                    ) }
                </Section>
            </main>
        </PageContent>
    }
}

fn table_or_error(data: Result<TabularData<Html>, TableError>, loading: bool) -> Html {
    match data {
        Ok(data) => html! {
            <Table {data} {loading} spread={true} class="table-scroll" />
        },
        Err(e) => {
            log::error!("{}", e);
            html! { <p class="error-text">{ e.to_string() }</p> }
        }
    }
}

fn filter_label(text: &'static str) -> Html {
    html! {
        <>
            { icon("filter_alt") }
            <span>{ text }</span>
        </>
    }
}

fn id_cell(id: i64) -> Html {
    html! { <div class="id-cell">{ id.to_string() }</div> }
}

fn actions(app: &AppContext, edit: Route, target: Resource, id: i64) -> Html {
    let on_edit = app.navigate.reform(move |_| edit);
    let on_delete = app
        .navigate
        .reform(move |_| Route::ConfirmDelete { target, id });

    html! {
        <div class="actions">
            <Button icon={"edit"} onclick={on_edit} />
            <Button icon={"delete"} kind={ButtonKind::Danger} onclick={on_delete} />
        </div>
    }
}

fn cancha_row(app: &AppContext, cancha: &Cancha) -> Row<Html> {
    let cells = CanchaCells::from(cancha);
    let (mark, class) = if cells.techada {
        ("check", "covered")
    } else {
        ("close", "uncovered")
    };

    Row::new()
        .cell("ID", id_cell(cells.id))
        .cell("Nombre", html! { <>{ cells.nombre.clone() }</> })
        .cell("Techada", html! { <span class={class}>{ icon(mark) }</span> })
        .cell(
            ACCIONES,
            actions(
                app,
                Route::Canchas { edit_id: Some(cells.id) },
                Resource::Canchas,
                cells.id,
            ),
        )
}

fn reserva_row(app: &AppContext, reserva: &Reserva) -> Row<Html> {
    let cells = ReservaCells::from(reserva);

    Row::new()
        .cell("ID", id_cell(cells.id))
        .cell("IDC", html! { <>{ cells.id_cancha.to_string() }</> })
        .cell("Día", html! { <>{ cells.dia.clone() }</> })
        .cell("Hora", html! { <>{ cells.hora.clone() }</> })
        .cell("Tiempo", html! { <>{ cells.tiempo.clone() }</> })
        .cell("Contacto", html! { <>{ cells.contacto.clone() }</> })
        .cell("Teléfono", html! { <>{ cells.telefono.clone() }</> })
        .cell(
            ACCIONES,
            actions(
                app,
                Route::Reservas { edit_id: Some(cells.id) },
                Resource::Reservas,
                cells.id,
            ),
        )
}
