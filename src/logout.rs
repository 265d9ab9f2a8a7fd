//! Logout control wiring.
//!
//! A click on the logout control cancels the anchor's own navigation, clears
//! the stored credentials, and sends the browser to the server's logout path,
//! which finishes teardown and redirects to the login page.

use std::rc::{Rc, Weak};

use crate::config::PresenterConfig;
use crate::error::StoreError;
use crate::page::{ClickEvent, Page};
use crate::store::SessionStore;

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

/// Remove the token and token type. Both removals are attempted even if the
/// first fails.
///
/// # Errors
///
/// Returns the first removal failure.
pub fn clear_credentials<S: SessionStore + ?Sized>(
    store: &S,
    config: &PresenterConfig,
) -> Result<(), StoreError> {
    let mut first_err = None;
    for key in config.credential_keys() {
        if let Err(err) = store.remove(key) {
            log::warn!("{err}");
            first_err.get_or_insert(err);
        }
    }
    first_err.map_or(Ok(()), Err)
}

/// Handle one click on the logout control.
///
/// Navigation happens even when clearing fails so the server side can still
/// end the session.
///
/// # Errors
///
/// Returns the credential clearing failure, after navigating.
pub fn handle_click<P, S>(
    event: &P::Event,
    page: &P,
    store: &S,
    config: &PresenterConfig,
) -> Result<(), StoreError>
where
    P: Page + ?Sized,
    S: SessionStore + ?Sized,
{
    event.prevent_default();
    let cleared = clear_credentials(store, config);
    page.navigate(&config.logout_path);
    cleared
}

/// Attach the logout handler if the page has a logout control.
///
/// Returns `false` when the control is absent; that is not an error.
///
/// The handler is stored by the page, so it only holds a weak page handle.
/// Clicks arriving after the page is dropped are ignored.
pub fn bind<P, S>(page: &Rc<P>, store: &Rc<S>, config: &PresenterConfig) -> bool
where
    P: Page + 'static,
    S: SessionStore + 'static,
{
    let Some(button) = page.element_by_id(&config.logout_button_id) else {
        log::debug!("no #{} on page; logout not bound", config.logout_button_id);
        return false;
    };

    let handler_page: Weak<P> = Rc::downgrade(page);
    let handler_store = Rc::clone(store);
    let handler_config = config.clone();
    page.on_click(
        &button,
        Box::new(move |event: &P::Event| {
            let Some(handler_page) = handler_page.upgrade() else {
                return;
            };
            if let Err(err) =
                handle_click(event, &*handler_page, &*handler_store, &handler_config)
            {
                log::error!("logout left credentials behind: {err}");
            }
        }),
    );
    true
}
