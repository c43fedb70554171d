use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::storage_keys;
use crate::error::StorageError;
use crate::prefs::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePreferences {
    pub necessary: bool,
    pub functional: bool,
    pub analytics: bool,
    pub marketing: bool,
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self::necessary_only()
    }
}

impl CookiePreferences {
    pub fn necessary_only() -> Self {
        Self {
            necessary: true,
            functional: false,
            analytics: false,
            marketing: false,
        }
    }

    pub fn all() -> Self {
        Self {
            necessary: true,
            functional: true,
            analytics: true,
            marketing: true,
        }
    }

    pub fn set(&mut self, category: CookieCategory, enabled: bool) {
        match category {
            // required for the site to work
            CookieCategory::Necessary => self.necessary = true,
            CookieCategory::Functional => self.functional = enabled,
            CookieCategory::Analytics => self.analytics = enabled,
            CookieCategory::Marketing => self.marketing = enabled,
        }
    }

    pub fn is_enabled(&self, category: CookieCategory) -> bool {
        match category {
            CookieCategory::Necessary => self.necessary,
            CookieCategory::Functional => self.functional,
            CookieCategory::Analytics => self.analytics,
            CookieCategory::Marketing => self.marketing,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CookieCategory {
    Necessary,
    Functional,
    Analytics,
    Marketing,
}

impl CookieCategory {
    pub const ALL: [CookieCategory; 4] = [
        CookieCategory::Necessary,
        CookieCategory::Functional,
        CookieCategory::Analytics,
        CookieCategory::Marketing,
    ];
}

pub fn try_load_cookie_preferences(store: &impl KeyValueStore) -> Result<Option<CookiePreferences>, StorageError> {
    let key = storage_keys::COOKIE_PREFERENCES;
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Saved choice, or `None` if the visitor has not decided yet (banner should show).
/// A malformed entry is dropped so the visitor is asked again.
pub fn load_cookie_preferences(store: &impl KeyValueStore) -> Option<CookiePreferences> {
    match try_load_cookie_preferences(store) {
        Ok(prefs) => prefs,
        Err(e @ StorageError::Malformed { .. }) => {
            warn!("Dropping stored cookie preferences: {}", e);
            if let Err(e) = store.remove(storage_keys::COOKIE_PREFERENCES) {
                warn!("Could not clear cookie preferences: {}", e);
            }
            None
        }
        Err(e) => {
            warn!("Ignoring stored cookie preferences: {}", e);
            None
        }
    }
}

pub fn save_cookie_preferences(store: &impl KeyValueStore, prefs: CookiePreferences) {
    let prefs = CookiePreferences { necessary: true, ..prefs };
    let result = serde_json::to_string(&prefs)
        .map_err(|source| StorageError::Malformed {
            key: storage_keys::COOKIE_PREFERENCES.to_string(),
            source,
        })
        .and_then(|json| store.set(storage_keys::COOKIE_PREFERENCES, &json));
    if let Err(e) = result {
        warn!("Could not store cookie preferences: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::storage::MemoryStorage;

    #[test]
    fn nothing_stored_means_undecided() {
        let store = MemoryStorage::default();
        assert_eq!(load_cookie_preferences(&store), None);
    }

    #[test]
    fn stored_verbatim_as_json() {
        let store = MemoryStorage::default();
        let prefs = CookiePreferences {
            analytics: true,
            ..CookiePreferences::necessary_only()
        };
        save_cookie_preferences(&store, prefs);
        let raw = store.get(storage_keys::COOKIE_PREFERENCES).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"{"necessary":true,"functional":false,"analytics":true,"marketing":false}"#
        );
        assert_eq!(load_cookie_preferences(&store), Some(prefs));
    }

    #[test]
    fn necessary_cannot_be_disabled() {
        let store = MemoryStorage::default();
        let mut prefs = CookiePreferences::all();
        prefs.set(CookieCategory::Necessary, false);
        assert!(prefs.necessary);
        save_cookie_preferences(&store, CookiePreferences { necessary: false, ..prefs });
        assert!(load_cookie_preferences(&store).unwrap().necessary);
    }

    #[test]
    fn corrupted_json_is_reported_and_ignored() {
        let store = MemoryStorage::default();
        store.set(storage_keys::COOKIE_PREFERENCES, "{not json").unwrap();
        assert!(matches!(
            try_load_cookie_preferences(&store),
            Err(StorageError::Malformed { .. })
        ));
        assert_eq!(load_cookie_preferences(&store), None);
        assert_eq!(store.get(storage_keys::COOKIE_PREFERENCES).unwrap(), None);
    }

    #[test]
    fn categories_toggle_independently() {
        let mut prefs = CookiePreferences::necessary_only();
        prefs.set(CookieCategory::Marketing, true);
        assert!(prefs.is_enabled(CookieCategory::Marketing));
        assert!(!prefs.is_enabled(CookieCategory::Analytics));
    }
}
