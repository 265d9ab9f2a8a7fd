//! Persistent key-value store seam.
//!
//! The presenter only ever reads one key and removes two, so the trait is
//! limited to those operations. Writes belong to the login page.
//!
//! `MemoryStore` backs native tests and non-browser hosts; `BrowserStorage`
//! wraps `window.localStorage` and only exists with the `hydrate` feature.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StoreError;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Origin-scoped string store.
pub trait SessionStore {
    /// Read `key`, returning `None` when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the host refuses the read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Remove`] if the host refuses the removal.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store with the same single-key semantics as `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `pairs`.
    pub fn with_entries<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Self { entries: RefCell::new(entries) }
    }

    /// Set `key` to `value`. Stands in for the login flow.
    pub fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// A store that could not be acquired reports the same failure on every
/// operation, so callers still run the parts that don't need storage.
impl<S: SessionStore> SessionStore for Result<S, StoreError> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Ok(store) => store.get(key),
            Err(err) => Err(err.clone()),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match self {
            Ok(store) => store.remove(key),
            Err(err) => Err(err.clone()),
        }
    }
}

/// `window.localStorage` handle.
#[cfg(feature = "hydrate")]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    /// Acquire the current window's `localStorage`.
    ///
    /// The returned `Result` is itself a [`SessionStore`]; on `Err` every
    /// operation fails with the acquisition error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when there is no window or the
    /// browser has storage disabled.
    pub fn local() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StoreError::Unavailable("localStorage is disabled".to_owned())),
            Err(err) => Err(StoreError::Unavailable(js_message(&err))),
        }
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(|err| StoreError::Read {
            key: key.to_owned(),
            message: js_message(&err),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key).map_err(|err| StoreError::Remove {
            key: key.to_owned(),
            message: js_message(&err),
        })
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
