//! Browser Storage
//!
//! `localStorage`-backed session store for the view beacon.

use folio::{KeyValueStore, StoreError};

/// Reads and writes `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = local_storage()
            .ok_or_else(|| StoreError::Unavailable("localStorage".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip_through_local_storage() {
        let store = LocalStorageStore;
        store.set("folio-test", "abc123").unwrap();
        assert_eq!(store.get("folio-test").as_deref(), Some("abc123"));
    }

    #[wasm_bindgen_test]
    fn test_missing_key() {
        assert_eq!(LocalStorageStore.get("folio-test-missing"), None);
    }
}
