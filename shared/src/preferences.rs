use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::locale::{Locale, DEFAULT_LOCALE};

pub const LOCALE_STORAGE_KEY: &str = "preferred-locale";
pub const THEME_STORAGE_KEY: &str = "theme";

/// Durable key-value storage for user preferences.
///
/// The browser build backs this with `localStorage`; tests use [`MemoryStore`].
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored language, or the default when absent or unrecognized.
pub fn load_locale<S: PreferenceStore + ?Sized>(store: &S) -> Locale {
    match store.read(LOCALE_STORAGE_KEY) {
        Some(tag) => Locale::from_code(&tag).unwrap_or_else(|| {
            log::warn!("Ignoring unsupported stored locale {:?}", tag);
            DEFAULT_LOCALE
        }),
        None => DEFAULT_LOCALE,
    }
}

pub fn save_locale<S: PreferenceStore + ?Sized>(store: &S, locale: Locale) -> Result<(), String> {
    store.write(LOCALE_STORAGE_KEY, locale.code())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

pub fn load_theme<S: PreferenceStore + ?Sized>(store: &S) -> Theme {
    store
        .read(THEME_STORAGE_KEY)
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

pub fn save_theme<S: PreferenceStore + ?Sized>(store: &S, theme: Theme) -> Result<(), String> {
    store.write(THEME_STORAGE_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("storage unavailable".to_string())
        }
    }

    #[test]
    fn test_locale_defaults_when_missing() {
        let store = MemoryStore::new();
        assert_eq!(load_locale(&store), Locale::En);
    }

    #[test]
    fn test_locale_persists() {
        let store = MemoryStore::new();
        save_locale(&store, Locale::Vi).unwrap();
        assert_eq!(store.read(LOCALE_STORAGE_KEY).as_deref(), Some("vi"));
        assert_eq!(load_locale(&store), Locale::Vi);
    }

    #[test]
    fn test_unsupported_locale_falls_back() {
        let store = MemoryStore::new();
        store.write(LOCALE_STORAGE_KEY, "fr").unwrap();
        assert_eq!(load_locale(&store), Locale::En);
        store.write(LOCALE_STORAGE_KEY, "\"vi\"").unwrap();
        assert_eq!(load_locale(&store), Locale::En);
    }

    #[test]
    fn test_theme_round_trip_and_fallback() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Light);
        save_theme(&store, Theme::Dark).unwrap();
        assert_eq!(load_theme(&store), Theme::Dark);
        store.write(THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(load_theme(&store), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_write_failure_is_reported() {
        assert!(save_locale(&FailingStore, Locale::Vi).is_err());
        assert_eq!(load_locale(&FailingStore), Locale::En);
    }
}
