use common::theme::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PageContentProps {
    pub theme: Theme,
    #[prop_or_default]
    pub children: Html,
}

/// Page frame carrying the theme class every page is styled under.
pub struct PageContent;

impl Component for PageContent {
    type Message = ();
    type Properties = PageContentProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class={classes!("page", props.theme.as_str())}>
                <div class="page-body">
                    { props.children.clone() }
                    <footer class="footer">{ "Paddler" }</footer>
                </div>
            </div>
        }
    }
}
