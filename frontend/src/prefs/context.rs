use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use crate::i18n::Language;
use crate::prefs::cookies::{load_cookie_preferences, save_cookie_preferences, CookiePreferences};
use crate::prefs::language::{browser_language_tag, initial_language, save_language};
use crate::prefs::storage::{BrowserStorage, KeyValueStore};

/// Site-wide visitor preferences, shared through a context instead of window events.
#[derive(Clone, Debug, PartialEq)]
pub struct Preferences {
    pub language: Language,
    /// Set once the visitor picked a language. Until then the language is only derived.
    pub language_chosen: bool,
    /// `None` until the visitor answered the cookie banner.
    pub cookies: Option<CookiePreferences>,
    pub cookie_settings_open: bool,
}

impl Preferences {
    pub fn load(store: &impl KeyValueStore, browser_tag: Option<&str>) -> Self {
        Self {
            language: initial_language(store, browser_tag),
            language_chosen: false,
            cookies: load_cookie_preferences(store),
            cookie_settings_open: false,
        }
    }

    pub fn needs_cookie_consent(&self) -> bool {
        self.cookies.is_none()
    }

    /// Language to write to storage, if the visitor chose one.
    pub fn language_to_persist(&self) -> Option<Language> {
        self.language_chosen.then_some(self.language)
    }
}

pub enum PreferencesAction {
    SetLanguage(Language),
    SaveCookies(CookiePreferences),
    OpenCookieSettings,
    CloseCookieSettings,
}

impl Reducible for Preferences {
    type Action = PreferencesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PreferencesAction::SetLanguage(lang) => {
                next.language = lang;
                next.language_chosen = true;
            }
            PreferencesAction::SaveCookies(prefs) => {
                next.cookies = Some(CookiePreferences { necessary: true, ..prefs });
                next.cookie_settings_open = false;
            }
            PreferencesAction::OpenCookieSettings => next.cookie_settings_open = true,
            PreferencesAction::CloseCookieSettings => next.cookie_settings_open = false,
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub type PreferencesContext = UseReducerHandle<Preferences>;

#[derive(Properties, PartialEq)]
pub struct PreferencesProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PreferencesProvider)]
pub fn preferences_provider(props: &PreferencesProviderProps) -> Html {
    let prefs = use_reducer(|| Preferences::load(&BrowserStorage, browser_language_tag().as_deref()));

    {
        let language = prefs.language;
        use_effect_with_deps(
            move |language| {
                info!("Language set to {}", language);
                if let Some(root) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    if let Err(e) = root.set_attribute("lang", language.code()) {
                        warn!("Could not set document language: {:?}", e);
                    }
                }
                || ()
            },
            language,
        );
    }

    {
        let chosen = prefs.language_to_persist();
        use_effect_with_deps(
            move |chosen| {
                if let Some(language) = chosen {
                    save_language(&BrowserStorage, *language);
                }
                || ()
            },
            chosen,
        );
    }

    {
        let cookies = prefs.cookies;
        use_effect_with_deps(
            move |cookies| {
                if let Some(cookies) = cookies {
                    save_cookie_preferences(&BrowserStorage, *cookies);
                }
                || ()
            },
            cookies,
        );
    }

    html! {
        <ContextProvider<PreferencesContext> context={prefs}>
            { for props.children.iter() }
        </ContextProvider<PreferencesContext>>
    }
}

#[hook]
pub fn use_preferences() -> Option<PreferencesContext> {
    use_context::<PreferencesContext>()
}

/// Current language; German when rendered outside the provider.
#[hook]
pub fn use_language() -> Language {
    use_context::<PreferencesContext>()
        .map(|prefs| prefs.language)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::cookies::save_cookie_preferences;
    use crate::prefs::language::save_language;
    use crate::prefs::storage::MemoryStorage;

    #[test]
    fn load_reads_both_preferences() {
        let store = MemoryStorage::default();
        save_language(&store, Language::En);
        save_cookie_preferences(&store, CookiePreferences::all());
        let prefs = Preferences::load(&store, None);
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.cookies, Some(CookiePreferences::all()));
        assert!(!prefs.needs_cookie_consent());
    }

    #[test]
    fn fresh_visitor_needs_consent() {
        let prefs = Preferences::load(&MemoryStorage::default(), Some("de-DE"));
        assert_eq!(prefs.language, Language::De);
        assert!(prefs.needs_cookie_consent());
    }

    #[test]
    fn reducer_applies_actions() {
        let prefs = Rc::new(Preferences::load(&MemoryStorage::default(), None));
        let prefs = prefs.reduce(PreferencesAction::SetLanguage(Language::En));
        assert_eq!(prefs.language, Language::En);

        let prefs = prefs.reduce(PreferencesAction::OpenCookieSettings);
        assert!(prefs.cookie_settings_open);

        let prefs = prefs.reduce(PreferencesAction::SaveCookies(CookiePreferences {
            necessary: false,
            ..CookiePreferences::all()
        }));
        assert!(!prefs.cookie_settings_open);
        assert_eq!(prefs.cookies, Some(CookiePreferences::all()));
    }

    #[test]
    fn derived_language_is_not_persisted() {
        let store = MemoryStorage::default();
        let prefs = Rc::new(Preferences::load(&store, Some("en-US")));
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.language_to_persist(), None);

        let prefs = prefs.reduce(PreferencesAction::SetLanguage(Language::En));
        assert_eq!(prefs.language_to_persist(), Some(Language::En));
    }

    #[test]
    fn unchanged_state_keeps_the_same_rc() {
        let prefs = Rc::new(Preferences::load(&MemoryStorage::default(), None));
        let same = prefs.clone().reduce(PreferencesAction::CloseCookieSettings);
        assert!(Rc::ptr_eq(&prefs, &same));

        let chosen = prefs.reduce(PreferencesAction::SetLanguage(Language::De));
        let again = chosen.clone().reduce(PreferencesAction::SetLanguage(Language::De));
        assert!(Rc::ptr_eq(&chosen, &again));
    }
}
