use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SectionProps {
    #[prop_or_default]
    pub children: Html,
    /// Lay children out in a row instead of a column.
    #[prop_or_default]
    pub row: bool,
    #[prop_or_default]
    pub class: Classes,
}

pub struct Section;

impl Component for Section {
    type Message = ();
    type Properties = SectionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let direction = if props.row { "section-row" } else { "section-col" };
        html! {
            <section class={classes!("section", direction, props.class.clone())}>
                { props.children.clone() }
            </section>
        }
    }
}
