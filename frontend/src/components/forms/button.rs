use yew::prelude::*;

use crate::components::helpers::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    Primary,
    #[default]
    Secondary,
    Success,
    Danger,
}

impl ButtonKind {
    fn class(self) -> &'static str {
        match self {
            ButtonKind::Primary => "btn-primary",
            ButtonKind::Secondary => "btn-secondary",
            ButtonKind::Success => "btn-success",
            ButtonKind::Danger => "btn-danger",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub kind: ButtonKind,
    /// Material icon name shown before the label.
    #[prop_or_default]
    pub icon: Option<&'static str>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub submit: bool,
    #[prop_or_default]
    pub stretched: bool,
    #[prop_or_default]
    pub onclick: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
}

pub struct Button;

impl Component for Button {
    type Message = ();
    type Properties = ButtonProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let class = classes!(
            "btn",
            props.kind.class(),
            props.stretched.then_some("stretched"),
            props.disabled.then_some("disabled"),
            props.class.clone()
        );
        let onclick = props.onclick.reform(|_: MouseEvent| ());

        html! {
            <button
                {class}
                type={if props.submit { "submit" } else { "button" }}
                disabled={props.disabled}
                {onclick}
            >
                { for props.icon.map(icon) }
                { props.children.clone() }
            </button>
        }
    }
}
