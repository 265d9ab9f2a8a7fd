//! # navbar-session
//!
//! WASM page helper that keeps the site navbar in step with the locally
//! stored session token and wires the logout control.
//!
//! The logic is written against two seams, [`page::Page`] and
//! [`store::SessionStore`], so it runs natively under `cargo test` with
//! [`recording::RecordingPage`] and [`store::MemoryStore`]. The `hydrate`
//! feature adds the `web-sys` implementations and the start function that
//! runs the presenter once the document is ready.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`presenter`] | Page-load orchestration |
//! | [`navbar`] | Visibility plan and sync |
//! | [`logout`] | Logout click handling and binding |
//! | [`session`] | Signed-in/out classification of the token |
//! | [`store`] | Key-value store seam and implementations |
//! | [`page`] | DOM/location seam and the browser implementation |
//! | [`recording`] | Headless page for tests |
//! | [`config`] / [`consts`] | Ids, keys, marker class, logout path |
//! | [`error`] | Store error type |

pub mod config;
pub mod consts;
pub mod error;
pub mod logout;
pub mod navbar;
pub mod page;
pub mod presenter;
pub mod recording;
pub mod session;
pub mod store;

#[cfg(feature = "hydrate")]
mod boot;

#[cfg(test)]
mod test_support;

pub use config::PresenterConfig;
pub use error::StoreError;
pub use presenter::{initialize, initialize_with};
pub use session::SessionState;
