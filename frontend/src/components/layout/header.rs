//! Title bar with the navigation links and the theme switch. On narrow
//! screens the links collapse into a vertical menu.

use common::route::Route;
use common::theme::Theme;
use yew::prelude::*;

use crate::components::helpers::icon;
use crate::context::AppContext;

/// Entries of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Home,
    Canchas,
    Reservas,
}

impl NavPage {
    const ALL: [NavPage; 3] = [NavPage::Home, NavPage::Canchas, NavPage::Reservas];

    fn label(self) -> &'static str {
        match self {
            NavPage::Home => "Dashboard",
            NavPage::Canchas => "Registrar Cancha",
            NavPage::Reservas => "Reservar",
        }
    }

    fn route(self) -> Route {
        match self {
            NavPage::Home => Route::Dashboard,
            NavPage::Canchas => Route::Canchas { edit_id: None },
            NavPage::Reservas => Route::Reservas { edit_id: None },
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub app: AppContext,
    /// Highlighted entry; `None` on pages outside the navigation.
    #[prop_or_default]
    pub selected: Option<NavPage>,
    /// Shown instead of the entries on pages outside the navigation.
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

pub enum Msg {
    ToggleMenu,
}

pub struct Header {
    menu_open: bool,
}

impl Component for Header {
    type Message = Msg;
    type Properties = HeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { menu_open: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let app = &props.app;
        let go_home = app.navigate.reform(|_: MouseEvent| Route::Dashboard);
        let toggle_theme = app.on_toggle_theme.reform(|_: MouseEvent| ());
        let (theme_icon, theme_hint) = match app.theme {
            Theme::Light => ("dark_mode", "Cambiar a tema Oscuro"),
            Theme::Dark => ("light_mode", "Cambiar a tema Claro"),
        };

        html! {
            <div class="header">
                <div class="header-bar">
                    <h1 class="clickable" onclick={go_home}>{ "Paddler" }</h1>
                    {
                        match &props.title {
                            Some(title) => html! { <span class="header-title">{ title.clone() }</span> },
                            None => html! {},
                        }
                    }
                    <button class="menu-button" onclick={ctx.link().callback(|_| Msg::ToggleMenu)}>
                        { icon("menu") }
                    </button>
                    <nav class="nav-wide">
                        { self.entries(props) }
                        <button class="theme-button" title={theme_hint} onclick={toggle_theme.clone()}>
                            { icon(theme_icon) }
                        </button>
                    </nav>
                </div>
                <nav class={classes!("nav-menu", (!self.menu_open).then_some("hidden"))}>
                    { self.entries(props) }
                    <button class="theme-button" onclick={toggle_theme}>
                        { icon(theme_icon) }
                        <span>{ theme_hint }</span>
                    </button>
                </nav>
            </div>
        }
    }
}

impl Header {
    fn entries(&self, props: &HeaderProps) -> Html {
        NavPage::ALL
            .iter()
            .map(|&page| {
                if props.selected == Some(page) {
                    html! { <div class="nav-entry selected">{ page.label() }</div> }
                } else {
                    let route = page.route();
                    let onclick = props.app.navigate.reform(move |e: MouseEvent| {
                        e.prevent_default();
                        route
                    });
                    html! {
                        <a class="nav-entry" href={route.href()} {onclick}>{ page.label() }</a>
                    }
                }
            })
            .collect()
    }
}
