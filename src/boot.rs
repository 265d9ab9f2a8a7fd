//! Browser start-up.
//!
//! Installs the panic hook and console logger, then runs the presenter once
//! the DOM is parsed: immediately if the module loaded late, otherwise on
//! `DOMContentLoaded`.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::page::BrowserPage;
use crate::presenter;
use crate::store::{BrowserStorage, js_message};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }

    let Some(page) = BrowserPage::current() else {
        log::warn!("no document; session presenter skipped");
        return;
    };
    if page.document().ready_state() != "loading" {
        run(page);
        return;
    }

    let target = page.document().clone();
    let on_ready = Closure::once_into_js(move || run(page));
    if let Err(err) =
        target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        log::error!("failed to wait for DOMContentLoaded: {}", js_message(&err));
    }
}

fn run(page: BrowserPage) {
    // Marker and logout binding don't need storage; only the sync does.
    let store = BrowserStorage::local();
    if let Err(err) = &store {
        log::warn!("{err}");
    }

    let page = Rc::new(page);
    if let Err(err) = presenter::initialize(&page, &Rc::new(store)) {
        log::error!("navbar left unsynced: {err}");
    }
    // The logout handler holds a weak page handle; keep it alive with the document.
    std::mem::forget(page);
}
