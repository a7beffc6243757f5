//! # Key-value persistence seam
//!
//! Everything the app persists is a JSON document stored under a fixed string key,
//! the same shape as the browser's `localStorage`. [`KeyValueStore`] abstracts that
//! so the directory and the login guard run unchanged against:
//!
//! | Backend | Where | Used by |
//! |---------|-------|---------|
//! | [`crate::LocalStore`] | `window.localStorage` | web (WASM + `web` feature) |
//! | [`crate::FileStore`] | one file per key in a directory | desktop |
//! | [`crate::MemoryStore`] | process memory | tests |
//!
//! Reads never fail: an unreadable or missing entry is simply `None`, and callers
//! fall back to defaults. Writes report a [`StoreError`] which callers log.

use crate::error::StoreError;

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
