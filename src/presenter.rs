//! Page-load entry point for the navbar/session presenter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page load, after the DOM is ready. It marks the body as
//! script-enabled, binds the logout control, and reconciles navbar
//! visibility with the stored token. Nothing is retained between runs; the
//! next page load reads the store again.
//!
//! ERROR HANDLING
//! ==============
//! Only a storage failure is returned, whether the token read was refused or
//! the store could not be acquired at all. By then the body marker and the
//! logout handler are already in place, so logout keeps working.

use std::rc::Rc;

use crate::config::PresenterConfig;
use crate::error::StoreError;
use crate::page::Page;
use crate::session::SessionState;
use crate::store::SessionStore;
use crate::{logout, navbar};

#[cfg(test)]
#[path = "presenter_test.rs"]
mod presenter_test;

/// Run the presenter against the default template contract.
///
/// # Errors
///
/// Returns the store's error if the token cannot be read.
pub fn initialize<P, S>(page: &Rc<P>, store: &Rc<S>) -> Result<SessionState, StoreError>
where
    P: Page + 'static,
    S: SessionStore + 'static,
{
    initialize_with(page, store, &PresenterConfig::default())
}

/// Run the presenter with explicit ids, keys, and paths.
///
/// # Errors
///
/// Returns the store's error if the token cannot be read.
pub fn initialize_with<P, S>(
    page: &Rc<P>,
    store: &Rc<S>,
    config: &PresenterConfig,
) -> Result<SessionState, StoreError>
where
    P: Page + 'static,
    S: SessionStore + 'static,
{
    page.add_body_class(&config.active_class);
    let bound = logout::bind(page, store, config);
    let state = navbar::sync_navbar(&**page, &**store, config)?;
    log::info!("session presenter ready: {state:?}, logout bound: {bound}");
    Ok(state)
}
