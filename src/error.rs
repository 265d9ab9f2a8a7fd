//! Error types for the session presenter.
//!
//! Only storage access can fail in a way callers care about. Missing DOM
//! elements and an absent token are normal states, not errors.

/// Failure talking to the persistent key-value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("local storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read {key}: {message}")]
    Read { key: String, message: String },
    #[error("failed to remove {key}: {message}")]
    Remove { key: String, message: String },
}
