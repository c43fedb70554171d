use log::warn;

use crate::config::storage_keys;
use crate::i18n::Language;
use crate::prefs::storage::KeyValueStore;

/// Stored language, or `None` when nothing usable is stored.
pub fn load_stored_language(store: &impl KeyValueStore) -> Option<Language> {
    match store.get(storage_keys::LANGUAGE) {
        Ok(Some(code)) => Language::from_code(&code),
        Ok(None) => None,
        Err(e) => {
            warn!("Could not read language preference: {}", e);
            None
        }
    }
}

/// Language to start with: stored choice first, then the browser's language tag.
pub fn initial_language(store: &impl KeyValueStore, browser_tag: Option<&str>) -> Language {
    load_stored_language(store)
        .or_else(|| browser_tag.map(Language::from_browser_tag))
        .unwrap_or_default()
}

pub fn save_language(store: &impl KeyValueStore, lang: Language) {
    if let Err(e) = store.set(storage_keys::LANGUAGE, lang.code()) {
        warn!("Could not store language preference: {}", e);
    }
}

pub fn browser_language_tag() -> Option<String> {
    web_sys::window().and_then(|w| w.navigator().language())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::storage::MemoryStorage;

    #[test]
    fn defaults_to_german_without_hints() {
        let store = MemoryStorage::default();
        assert_eq!(initial_language(&store, None), Language::De);
    }

    #[test]
    fn browser_tag_used_on_first_visit() {
        let store = MemoryStorage::default();
        assert_eq!(initial_language(&store, Some("en-US")), Language::En);
    }

    #[test]
    fn choice_survives_reload() {
        let store = MemoryStorage::default();
        save_language(&store, Language::En);
        // a fresh page load reads the same storage again
        assert_eq!(initial_language(&store, Some("de-DE")), Language::En);
        save_language(&store, Language::De);
        assert_eq!(initial_language(&store, Some("en-GB")), Language::De);
    }

    #[test]
    fn garbage_value_is_ignored() {
        let store = MemoryStorage::default();
        store.set(storage_keys::LANGUAGE, "klingon").unwrap();
        assert_eq!(load_stored_language(&store), None);
        assert_eq!(initial_language(&store, None), Language::De);
    }
}
