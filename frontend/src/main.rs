use log::{error, info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod error;
mod i18n;
mod quote {
    pub mod form;
    pub mod mailto;
    pub mod state;
    pub mod validation;
}
mod prefs {
    pub mod context;
    pub mod cookies;
    pub mod language;
    pub mod storage;
}
mod chat {
    pub mod client;
    pub mod transcript;
}
mod content {
    pub mod faq;
    pub mod industries;
    pub mod legal;
    pub mod partners;
    pub mod services;
    pub mod site;
    pub mod testimonials;
}
mod components {
    pub mod button;
    pub mod card;
    pub mod chat_widget;
    pub mod cookie_banner;
    pub mod footer;
    pub mod form_field;
    pub mod language_toggle;
    pub mod modal;
    pub mod nav;
    pub mod scroll_to_top;
}
mod pages {
    pub mod faq;
    pub mod home;
    pub mod legal;
    pub mod not_found;
    pub mod quote;
    pub mod sections;
}

use components::{
    chat_widget::ChatWidget,
    cookie_banner::CookieBanner,
    footer::Footer,
    nav::Nav,
    scroll_to_top::ScrollToTop,
};
use pages::{
    home::Home,
    legal::{Imprint, Privacy, Terms},
    not_found::NotFound,
};
use prefs::context::PreferencesProvider;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/imprint")]
    Imprint,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <Terms /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <Privacy /> }
        }
        Route::Imprint => {
            info!("Rendering Imprint page");
            html! { <Imprint /> }
        }
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <PreferencesProvider>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
                <ScrollToTop />
                <ChatWidget />
                <CookieBanner />
            </BrowserRouter>
        </PreferencesProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        // the panic hook still reports to the console
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    if web_sys::window().is_none() {
        error!("No window available, nothing to render");
        return;
    }
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/terms"), Some(Route::Terms));
        assert_eq!(Route::recognize("/privacy"), Some(Route::Privacy));
        assert_eq!(Route::recognize("/imprint"), Some(Route::Imprint));
        assert_eq!(Route::recognize("/tracking"), Some(Route::NotFound));
        assert_eq!(Route::Imprint.to_path(), "/imprint");
    }
}
