use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::t;
use crate::prefs::context::use_language;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let lang = use_language();
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{ t(
                "Diese Seite gibt es leider nicht. Vielleicht hat sie sich auf den Weg gemacht.",
                "This page does not exist. Maybe it is already out for delivery.",
            ).get(lang) }</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                { t("Zur Startseite", "Back to home").get(lang) }
            </Link<Route>>
        </div>
    }
}
