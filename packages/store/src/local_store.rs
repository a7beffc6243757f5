//! # Browser `localStorage` backend
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. Values are
//! written as JSON text under fixed keys in the origin's `window.localStorage`, the
//! same place the app has always kept its state.
//!
//! Storage can be missing (privacy modes, sandboxed iframes) or full (quota). A
//! store without access reads as empty and reports writes as
//! [`StoreError::Unavailable`]; the app keeps running on its in-memory state.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

#[derive(Clone)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage is not available; changes will not survive a reload");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_string()))
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: describe(e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: describe(e),
            })
    }
}
