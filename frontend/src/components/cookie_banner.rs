use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::modal::Modal;
use crate::i18n::{t, Language, Text};
use crate::prefs::context::{use_preferences, PreferencesAction};
use crate::prefs::cookies::{CookieCategory, CookiePreferences};
use crate::Route;

fn category_label(category: CookieCategory) -> Text {
    match category {
        CookieCategory::Necessary => t("Notwendig", "Necessary"),
        CookieCategory::Functional => t("Funktional", "Functional"),
        CookieCategory::Analytics => t("Statistik", "Analytics"),
        CookieCategory::Marketing => t("Marketing", "Marketing"),
    }
}

fn category_description(category: CookieCategory) -> Text {
    match category {
        CookieCategory::Necessary => t(
            "Speichert Ihre Sprach- und Cookie-Auswahl. Immer aktiv.",
            "Stores your language and cookie choices. Always on.",
        ),
        CookieCategory::Functional => t(
            "Ermöglicht den Chat und eingebettete Inhalte wie Karten.",
            "Enables the chat and embedded content such as maps.",
        ),
        CookieCategory::Analytics => t(
            "Hilft uns zu verstehen, wie die Website genutzt wird.",
            "Helps us understand how the website is used.",
        ),
        CookieCategory::Marketing => t(
            "Wird verwendet, um relevante Werbung anzuzeigen.",
            "Used to show relevant advertising.",
        ),
    }
}

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let prefs = use_preferences();
    let Some(prefs) = prefs else {
        return html! {};
    };
    let lang = prefs.language;

    let save = |choice: CookiePreferences| {
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| prefs.dispatch(PreferencesAction::SaveCookies(choice)))
    };
    let open_settings = {
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| prefs.dispatch(PreferencesAction::OpenCookieSettings))
    };

    html! {
        <>
            if prefs.needs_cookie_consent() && !prefs.cookie_settings_open {
                <div class="cookie-banner" role="region" aria-label="Cookies">
                    <p>
                        { t(
                            "Wir verwenden Cookies und lokalen Speicher, um diese Website bereitzustellen und zu verbessern. Details finden Sie in der ",
                            "We use cookies and local storage to provide and improve this website. Details are in our ",
                        ).get(lang) }
                        <Link<Route> to={Route::Privacy}>{ t("Datenschutzerklärung", "privacy policy").get(lang) }</Link<Route>>
                        {"."}
                    </p>
                    <div class="cookie-actions">
                        <Button variant={ButtonVariant::Ghost} onclick={open_settings}>
                            { t("Einstellungen", "Settings").get(lang) }
                        </Button>
                        <Button variant={ButtonVariant::Secondary} onclick={save(CookiePreferences::necessary_only())}>
                            { t("Nur notwendige", "Necessary only").get(lang) }
                        </Button>
                        <Button onclick={save(CookiePreferences::all())}>
                            { t("Alle akzeptieren", "Accept all").get(lang) }
                        </Button>
                    </div>
                </div>
            }
            <CookieSettings />
        </>
    }
}

#[function_component(CookieSettings)]
fn cookie_settings() -> Html {
    let prefs = use_preferences();
    let open = prefs.as_ref().map(|p| p.cookie_settings_open).unwrap_or(false);
    let lang = prefs.as_ref().map(|p| p.language).unwrap_or_default();
    let saved = prefs.as_ref().and_then(|p| p.cookies).unwrap_or_default();
    let draft = use_state(|| saved);

    // start from the stored choice each time the dialog opens
    {
        let draft = draft.clone();
        use_effect_with_deps(
            move |(open, saved)| {
                if *open {
                    draft.set(*saved);
                }
                || ()
            },
            (open, saved),
        );
    }

    let Some(prefs) = prefs else {
        return html! {};
    };

    let on_close = {
        let prefs = prefs.clone();
        Callback::from(move |_: ()| prefs.dispatch(PreferencesAction::CloseCookieSettings))
    };
    let on_save = {
        let prefs = prefs.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| prefs.dispatch(PreferencesAction::SaveCookies(*draft)))
    };
    let on_accept_all = {
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| prefs.dispatch(PreferencesAction::SaveCookies(CookiePreferences::all())))
    };

    let footer = html! {
        <>
            <Button variant={ButtonVariant::Secondary} onclick={on_save}>
                { t("Auswahl speichern", "Save selection").get(lang) }
            </Button>
            <Button onclick={on_accept_all}>
                { t("Alle akzeptieren", "Accept all").get(lang) }
            </Button>
        </>
    };

    html! {
        <Modal open={open} title={t("Cookie-Einstellungen", "Cookie settings").get(lang)} {on_close} footer={footer}>
            { for CookieCategory::ALL.into_iter().map(|category| render_category(category, lang, &draft)) }
        </Modal>
    }
}

fn render_category(category: CookieCategory, lang: Language, draft: &UseStateHandle<CookiePreferences>) -> Html {
    let id = format!("cookie-{:?}", category).to_lowercase();
    let checked = draft.is_enabled(category);
    let onchange = {
        let draft = draft.clone();
        Callback::from(move |_: Event| {
            let mut next = *draft;
            next.set(category, !next.is_enabled(category));
            draft.set(next);
        })
    };
    html! {
        <div class="cookie-category">
            <label for={id.clone()}>
                <input
                    id={id}
                    type="checkbox"
                    checked={checked}
                    disabled={category == CookieCategory::Necessary}
                    {onchange}
                />
                <strong>{ category_label(category).get(lang) }</strong>
            </label>
            <p>{ category_description(category).get(lang) }</p>
        </div>
    }
}
