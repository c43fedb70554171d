use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::nav::anchor_callback;
use crate::config::company;
use crate::content::services::SERVICES;
use crate::content::site::FOOTER_TAGLINE;
use crate::i18n::t;
use crate::prefs::context::{use_language, use_preferences, PreferencesAction};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let lang = use_language();
    let prefs = use_preferences();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let on_home = matches!(route, Some(Route::Home) | None);
    let year = Local::now().year();

    let open_cookie_settings = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(prefs) = &prefs {
            prefs.dispatch(PreferencesAction::OpenCookieSettings);
        }
    });

    html! {
        <footer class="site-footer">
            <style>{FOOTER_STYLE}</style>
            <div class="footer-grid">
                <div class="footer-column">
                    <h3>{ company::NAME }</h3>
                    <p>{ FOOTER_TAGLINE.get(lang) }</p>
                    <address>
                        { company::STREET }<br />
                        { format!("{} {}", company::POSTAL_CODE, company::CITY) }<br />
                        <a href={format!("tel:{}", company::PHONE.replace(' ', ""))}>{ company::PHONE }</a><br />
                        <a href={format!("mailto:{}", company::EMAIL)}>{ company::EMAIL }</a>
                    </address>
                </div>
                <div class="footer-column">
                    <h4>{ t("Leistungen", "Services").get(lang) }</h4>
                    <ul>
                        { for SERVICES.iter().map(|service| html! {
                            <li>
                                <a
                                    href="/#services"
                                    onclick={anchor_callback("services", on_home, navigator.clone(), None)}
                                >
                                    { service.title.get(lang) }
                                </a>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{ t("Rechtliches", "Legal").get(lang) }</h4>
                    <ul>
                        <li><Link<Route> to={Route::Imprint}>{ t("Impressum", "Imprint").get(lang) }</Link<Route>></li>
                        <li><Link<Route> to={Route::Privacy}>{ t("Datenschutz", "Privacy").get(lang) }</Link<Route>></li>
                        <li><Link<Route> to={Route::Terms}>{ t("AGB", "Terms").get(lang) }</Link<Route>></li>
                        <li>
                            <a href="#" onclick={open_cookie_settings}>
                                { t("Cookie-Einstellungen", "Cookie settings").get(lang) }
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                { format!("© {} {}", year, company::NAME) }
            </div>
        </footer>
    }
}

const FOOTER_STYLE: &str = r#"
.site-footer {
    background: #0c1b2e;
    color: rgba(255, 255, 255, 0.75);
    padding: 4rem 1.5rem 1.5rem;
}
.footer-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 2fr 1fr 1fr;
    gap: 2rem;
}
.site-footer h3, .site-footer h4 {
    color: #fff;
    margin-bottom: 1rem;
}
.site-footer ul {
    list-style: none;
    padding: 0;
}
.site-footer li {
    margin-bottom: 0.5rem;
}
.site-footer a {
    color: rgba(255, 255, 255, 0.75);
    text-decoration: none;
}
.site-footer a:hover {
    color: #f28c28;
}
.site-footer address {
    font-style: normal;
    line-height: 1.7;
}
.footer-bottom {
    max-width: 1200px;
    margin: 3rem auto 0;
    padding-top: 1.5rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    font-size: 0.85rem;
    text-align: center;
}
@media (max-width: 768px) {
    .footer-grid {
        grid-template-columns: 1fr;
    }
}
"#;
