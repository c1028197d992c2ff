//! Root component: startup greeting, client-side routing and theme.

use std::rc::Rc;

use common::api::{ApiRequest, Backend, ClientError};
use common::route::Route;
use common::theme::ThemeState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::UrlSearchParams;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::adapters::http::load_config;
use crate::adapters::{HttpBackend, LocalStorageThemeStore};
use crate::components::helpers::loading_indicator;
use crate::components::layout::{Header, PageContent};
use crate::context::AppContext;
use crate::pages::{CanchasPage, Dashboard, DeleteConfirmationPage, ErrorReport, ReservasPage};

pub enum Startup {
    Loading,
    Ready(Rc<HttpBackend>),
    Failed { error: String, cause: String },
}

pub enum Msg {
    Started(Result<HttpBackend, ClientError>),
    Navigate(Route),
    LocationChanged,
    ToggleTheme,
}

pub struct App {
    startup: Startup,
    route: Route,
    theme: ThemeState<LocalStorageThemeStore>,
    on_toggle_theme: Callback<()>,
    navigate: Callback<Route>,
    popstate: Option<Closure<dyn Fn(Event)>>,
}

/// Route of the current browser location.
fn current_route() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::NotFound;
    };
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    let params = UrlSearchParams::new_with_str(&search).ok();

    Route::parse(&path, |key| params.as_ref().and_then(|p| p.get(key)))
}

/// Loads the runtime configuration and greets the backend. The app only
/// starts once the backend answers.
async fn start() -> Result<HttpBackend, ClientError> {
    let config = load_config().await;
    log::info!("backend API at {}", config.backend_api_uri);

    let backend = HttpBackend::new(&config);
    let response = backend.send(&ApiRequest::greeting()).await?;
    if !response.is_success() {
        return Err(ClientError::from_response(&response));
    }
    log::info!("{}", response.body);
    Ok(backend)
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Started(start().await));
        });

        let link = ctx.link().clone();
        let popstate = Closure::<dyn Fn(Event)>::new(move |_: Event| {
            link.send_message(Msg::LocationChanged)
        });
        let listening = web_sys::window()
            .map(|w| {
                w.add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                    .is_ok()
            })
            .unwrap_or(false);
        if !listening {
            log::warn!("could not listen to history changes");
        }

        Self {
            startup: Startup::Loading,
            route: current_route(),
            theme: ThemeState::load(LocalStorageThemeStore),
            on_toggle_theme: ctx.link().callback(|_| Msg::ToggleTheme),
            navigate: ctx.link().callback(Msg::Navigate),
            popstate: listening.then_some(popstate),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Started(Ok(backend)) => {
                self.startup = Startup::Ready(Rc::new(backend));
                true
            }
            Msg::Started(Err(e)) => {
                log::error!("{}", e);
                self.startup = Startup::Failed {
                    error: "Falló el saludo con el servidor backend. El servicio API puede no estar disponible.".into(),
                    cause: e.cause(),
                };
                true
            }
            Msg::Navigate(route) => {
                let href = route.href();
                if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                    if history
                        .push_state_with_url(&JsValue::NULL, "", Some(&href))
                        .is_err()
                    {
                        log::warn!("could not push {} to the history", href);
                    }
                }
                self.route = route;
                true
            }
            Msg::LocationChanged => {
                self.route = current_route();
                true
            }
            Msg::ToggleTheme => {
                self.theme.toggle();
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.startup {
            Startup::Loading => html! {
                <PageContent theme={self.theme.theme()}>
                    <main class="main centered">{ loading_indicator() }</main>
                </PageContent>
            },
            Startup::Failed { error, cause } => html! {
                <ErrorReport error={error.clone()} cause={Some(AttrValue::from(cause.clone()))} />
            },
            Startup::Ready(backend) => {
                let app = AppContext {
                    backend: backend.clone(),
                    theme: self.theme.theme(),
                    on_toggle_theme: self.on_toggle_theme.clone(),
                    navigate: self.navigate.clone(),
                };
                self.page(app)
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(popstate), Some(window)) = (self.popstate.take(), web_sys::window()) {
            let _ = window
                .remove_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref());
        }
    }
}

impl App {
    fn page(&self, app: AppContext) -> Html {
        match self.route {
            Route::Dashboard => html! { <Dashboard {app} /> },
            Route::Canchas { edit_id } => html! { <CanchasPage {app} {edit_id} /> },
            Route::Reservas { edit_id } => html! { <ReservasPage {app} {edit_id} /> },
            Route::ConfirmDelete { target, id } => html! {
                <DeleteConfirmationPage {app} {target} {id} />
            },
            Route::NotFound => html! {
                <PageContent theme={app.theme}>
                    <Header app={app.clone()} title={AttrValue::from("No encontrado")} />
                    <main class="main">
                        <h2>{ "Página no encontrada" }</h2>
                        <p>{ "La dirección no corresponde a ninguna página de Paddler." }</p>
                    </main>
                </PageContent>
            },
        }
    }
}
