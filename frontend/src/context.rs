//! State shared by every page: the backend, the theme and navigation.

use std::rc::Rc;

use common::route::Route;
use common::theme::Theme;
use yew::Callback;

use crate::adapters::HttpBackend;

#[derive(Clone)]
pub struct AppContext {
    pub backend: Rc<HttpBackend>,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub navigate: Callback<Route>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
            && self.theme == other.theme
            && self.on_toggle_theme == other.on_toggle_theme
            && self.navigate == other.navigate
    }
}
