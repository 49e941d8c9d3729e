use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod browser;
mod config;
mod content;
mod countdown;
mod notice;
mod quiz;
mod share;
mod wizard;
mod components {
    pub mod notification;
}
mod pages {
    pub mod about;
    pub mod footer;
    pub mod hero;
    pub mod home;
    pub mod not_found;
    pub mod quiz;
    pub mod registration;
}

use components::notification::ToastProvider;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::PROGRAM_NAME);
    yew::Renderer::<App>::new().render();
}
