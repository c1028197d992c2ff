use crate::app::App;

mod adapters;
mod app;
mod components;
mod context;
mod logger;
mod pages;

fn main() {
    logger::init();

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("root"))
        .expect("Debe existir un elemento con id #root en el index.html de la app");

    yew::Renderer::<App>::with_root(root).render();
}
