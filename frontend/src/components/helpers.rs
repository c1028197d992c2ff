//! Small DOM utilities shared by the components.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Shows a notification at the bottom of the screen for three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_class_name("toast");

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// A Material icon.
pub fn icon(name: &'static str) -> Html {
    html! { <i class="material-icons">{ name }</i> }
}

/// Spinner shown while something loads.
pub fn loading_indicator() -> Html {
    html! {
        <div class="pulse">
            <i class="material-icons spin">{ "hourglass_empty" }</i>
        </div>
    }
}
