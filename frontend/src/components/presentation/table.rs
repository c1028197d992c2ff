//! CSS-grid table over [`TabularData`].
//!
//! The grid plan (template, header and data cells, empty placeholders)
//! comes from [`GridLayout`]; this component only maps each cell to markup.

use common::table::layout::{GridCell, GridLayout, Stripe, EMPTY_CELL};
use common::table::TabularData;
use yew::prelude::*;

use crate::components::helpers::loading_indicator;

#[derive(Properties, PartialEq, Clone)]
pub struct TableProps {
    pub data: TabularData<Html>,
    /// Draw the loading placeholder instead of `data`.
    #[prop_or_default]
    pub loading: bool,
    /// Take the full width of the container.
    #[prop_or_default]
    pub spread: bool,
    #[prop_or_default]
    pub class: Classes,
}

pub struct Table;

impl Component for Table {
    type Message = ();
    type Properties = TableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let placeholder;
        let data = if props.loading {
            placeholder = TabularData::loading(loading_indicator());
            &placeholder
        } else {
            &props.data
        };

        let body = data.body();
        let layout = GridLayout::of(&body);

        html! {
            <div class={classes!("table-frame", props.spread.then_some("spread"))}>
                <div
                    class={classes!("table-grid", props.class.clone())}
                    style={format!("grid-template-columns: {}", layout.template)}
                >
                    { for layout.cells.iter().map(render_cell) }
                </div>
            </div>
        }
    }
}

fn render_cell(cell: &GridCell<'_, Html>) -> Html {
    match cell {
        GridCell::Header(name) => html! {
            <div class="table-header">{ *name }</div>
        },
        GridCell::Data {
            value,
            stripe,
            row_styles,
        } => {
            let stripe = match stripe {
                Stripe::Even => "row-even",
                Stripe::Odd => "row-odd",
            };
            html! {
                <div class={classes!("table-cell", stripe, row_styles.map(str::to_string))}>
                    { value.cloned().unwrap_or_default() }
                </div>
            }
        }
        GridCell::Empty => html! {
            <div class="table-cell table-empty row-odd">{ EMPTY_CELL }</div>
        },
    }
}
