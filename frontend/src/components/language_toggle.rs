use yew::prelude::*;

use crate::i18n::Language;
use crate::prefs::context::{use_preferences, PreferencesAction};

#[function_component(LanguageToggle)]
pub fn language_toggle() -> Html {
    let prefs = use_preferences();
    let Some(prefs) = prefs else {
        return html! {};
    };
    let current = prefs.language;

    let choose = |lang: Language| {
        let prefs = prefs.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            prefs.dispatch(PreferencesAction::SetLanguage(lang));
        })
    };

    html! {
        <div class="language-toggle" role="group" aria-label="Sprache / Language">
            { for [Language::De, Language::En].into_iter().map(|lang| html! {
                <button
                    class={classes!("lang-option", (current == lang).then_some("active"))}
                    aria-pressed={(current == lang).to_string()}
                    onclick={choose(lang)}
                >
                    { lang.code().to_uppercase() }
                </button>
            }) }
        </div>
    }
}
