//! Labelled `<input>` driven by a [`Field`] definition.
//!
//! Phone inputs are regrouped and numbers clamped on every keystroke with
//! [`Field::transform`]; the parent receives the rewritten value.

use common::form::{Field, FieldKind};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FieldInputProps {
    pub field: Field,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    /// Replaces the field's plain label.
    #[prop_or_default]
    pub label: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
}

pub struct FieldInput;

impl Component for FieldInput {
    type Message = ();
    type Properties = FieldInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let field = props.field;

        let (min, max) = match field.kind {
            FieldKind::Number { min, max } => (Some(min.to_string()), Some(max.to_string())),
            _ => (None, None),
        };

        let oninput = props.on_change.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = field.transform(&input.value());
            if value != input.value() {
                input.set_value(&value);
            }
            value
        });

        let label = props
            .label
            .clone()
            .unwrap_or_else(|| html! { <>{ field.label }</> });

        html! {
            <div class={classes!("field", props.class.clone())}>
                <label for={field.id}>{ label }</label>
                <input
                    id={field.id}
                    type={field.input_type()}
                    value={props.value.clone()}
                    required={field.required}
                    {min}
                    {max}
                    {oninput}
                />
            </div>
        }
    }
}
