use spin_shared::preferences::PreferenceStore;
use web_sys::{window, Storage};

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// `localStorage`-backed preferences. Private browsing or a missing window
/// degrade to "nothing stored".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = local_storage().ok_or_else(|| "localStorage is unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("Failed to store {}: {:?}", key, e))
    }
}
