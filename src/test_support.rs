//! Shared fakes for unit tests.

use std::cell::RefCell;

use crate::error::StoreError;
use crate::store::{MemoryStore, SessionStore};

/// Store whose reads and/or removals are refused, like `localStorage` with
/// storage blocked. Successful removals hit the inner store.
#[derive(Default)]
pub struct FailingStore {
    pub inner: MemoryStore,
    pub fail_reads: bool,
    pub fail_remove_key: Option<String>,
    pub removed: RefCell<Vec<String>>,
}

impl SessionStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Read {
                key: key.to_owned(),
                message: "SecurityError".to_owned(),
            });
        }
        self.inner.get(key)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        if self.fail_remove_key.as_deref() == Some(key) {
            return Err(StoreError::Remove {
                key: key.to_owned(),
                message: "SecurityError".to_owned(),
            });
        }
        self.removed.borrow_mut().push(key.to_owned());
        self.inner.remove(key)
    }
}
