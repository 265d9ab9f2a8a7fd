//! Navbar visibility sync.
//!
//! Signed-in pages show the welcome and logout items and hide login/signup;
//! signed-out pages do the inverse. Each item is optional in the markup.

use crate::config::PresenterConfig;
use crate::error::StoreError;
use crate::page::{Display, Page};
use crate::session::SessionState;
use crate::store::SessionStore;

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

/// Target `display` for each navbar item id under `state`.
pub fn plan(state: SessionState, config: &PresenterConfig) -> [(&str, Display); 4] {
    let (member, guest) = if state.is_signed_in() {
        (Display::Block, Display::None)
    } else {
        (Display::None, Display::Block)
    };
    [
        (config.welcome_item_id.as_str(), member),
        (config.logout_item_id.as_str(), member),
        (config.login_item_id.as_str(), guest),
        (config.signup_item_id.as_str(), guest),
    ]
}

/// Apply the plan for `state`. Returns how many items were present and styled.
pub fn apply<P: Page + ?Sized>(page: &P, state: SessionState, config: &PresenterConfig) -> usize {
    let mut styled = 0;
    for (id, display) in plan(state, config) {
        if let Some(el) = page.element_by_id(id) {
            page.set_display(&el, display);
            styled += 1;
        }
    }
    styled
}

/// Read the token once and reconcile the navbar with it.
///
/// # Errors
///
/// Returns the store's error if the token cannot be read; the navbar is left
/// untouched in that case.
pub fn sync_navbar<P, S>(
    page: &P,
    store: &S,
    config: &PresenterConfig,
) -> Result<SessionState, StoreError>
where
    P: Page + ?Sized,
    S: SessionStore + ?Sized,
{
    let state = SessionState::load(store, &config.access_token_key)?;
    let styled = apply(page, state, config);
    log::debug!("navbar synced: {state:?}, {styled} of 4 items present");
    Ok(state)
}
