//! Authentication presence as seen by the navbar.
//!
//! TRADE-OFFS
//! ==========
//! Presence is a truthiness test on the stored string. Expired or malformed
//! tokens display as signed in; the server stays the authority on access.

use crate::error::StoreError;
use crate::store::SessionStore;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Whether the page should render the signed-in navbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    SignedIn,
    #[default]
    SignedOut,
}

impl SessionState {
    /// Classify a stored token. Absent and empty both mean signed out.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.is_empty() => Self::SignedIn,
            _ => Self::SignedOut,
        }
    }

    /// Read `key` once from `store` and classify it.
    ///
    /// # Errors
    ///
    /// Propagates the store's read failure.
    pub fn load<S: SessionStore + ?Sized>(store: &S, key: &str) -> Result<Self, StoreError> {
        let token = store.get(key)?;
        Ok(Self::from_token(token.as_deref()))
    }

    pub fn is_signed_in(self) -> bool {
        self == Self::SignedIn
    }
}
