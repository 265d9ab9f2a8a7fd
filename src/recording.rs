//! Headless [`Page`] that records what the presenter did.
//!
//! Used by the native test suite and by hosts that want to check a template's
//! ids against the presenter without a browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::page::{ClickEvent, Display, Page};

#[cfg(test)]
#[path = "recording_test.rs"]
mod recording_test;

type ClickHandler = Rc<dyn Fn(&RecordedClick)>;

/// Click delivered by [`RecordingPage::click`].
#[derive(Debug, Default)]
pub struct RecordedClick {
    default_prevented: Cell<bool>,
}

impl RecordedClick {
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl ClickEvent for RecordedClick {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

/// In-memory page: a set of element ids, the body class list, registered
/// click handlers, and every navigation requested.
#[derive(Default)]
pub struct RecordingPage {
    elements: RefCell<HashMap<String, Option<Display>>>,
    body_classes: RefCell<Vec<String>>,
    handlers: RefCell<HashMap<String, Vec<ClickHandler>>>,
    navigations: RefCell<Vec<String>>,
}

impl RecordingPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a page containing elements with `ids`, none styled yet.
    pub fn with_elements<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let page = Self::new();
        for id in ids {
            page.insert_element(id);
        }
        page
    }

    pub fn insert_element(&self, id: &str) {
        self.elements.borrow_mut().entry(id.to_owned()).or_insert(None);
    }

    /// Current `display` of `id`; `None` if the element is missing or unstyled.
    pub fn display(&self, id: &str) -> Option<Display> {
        self.elements.borrow().get(id).copied().flatten()
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    pub fn body_classes(&self) -> Vec<String> {
        self.body_classes.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    /// Last navigation target, i.e. where the browser would end up.
    pub fn location(&self) -> Option<String> {
        self.navigations.borrow().last().cloned()
    }

    pub fn handler_count(&self, id: &str) -> usize {
        self.handlers.borrow().get(id).map_or(0, Vec::len)
    }

    /// Dispatch a click on `id`. Returns `None` when no such element exists.
    pub fn click(&self, id: &str) -> Option<RecordedClick> {
        if !self.has_element(id) {
            return None;
        }
        let handlers = self.handlers.borrow().get(id).cloned().unwrap_or_default();
        let event = RecordedClick::default();
        for handler in handlers {
            handler(&event);
        }
        Some(event)
    }
}

impl Page for RecordingPage {
    type Element = String;
    type Event = RecordedClick;

    fn add_body_class(&self, class: &str) {
        let mut classes = self.body_classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn element_by_id(&self, id: &str) -> Option<String> {
        self.has_element(id).then(|| id.to_owned())
    }

    fn set_display(&self, element: &String, display: Display) {
        if let Some(slot) = self.elements.borrow_mut().get_mut(element) {
            *slot = Some(display);
        }
    }

    fn on_click(&self, element: &String, handler: Box<dyn Fn(&RecordedClick)>) {
        self.handlers
            .borrow_mut()
            .entry(element.clone())
            .or_default()
            .push(Rc::from(handler));
    }

    fn navigate(&self, path: &str) {
        self.navigations.borrow_mut().push(path.to_owned());
    }
}
