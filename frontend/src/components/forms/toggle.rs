use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToggleProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub checked: bool,
    pub on_change: Callback<bool>,
    #[prop_or_default]
    pub class: Classes,
}

/// Checkbox styled as a switch.
pub struct Toggle;

impl Component for Toggle {
    type Message = ();
    type Properties = ToggleProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let onchange = props.on_change.reform(|e: Event| {
            e.target_unchecked_into::<HtmlInputElement>().checked()
        });

        html! {
            <div class={props.class.clone()}>
                <label class="toggle">
                    <span>{ props.label.clone() }</span>
                    <input
                        type="checkbox"
                        id={props.id.clone()}
                        checked={props.checked}
                        {onchange}
                    />
                </label>
            </div>
        }
    }
}
