//! Page seam: the DOM of the embedding page plus `window.location`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The presenter never touches `web_sys` directly. Everything it needs from
//! the browser goes through [`Page`], so the same logic runs against
//! [`BrowserPage`] in the browser and [`crate::recording::RecordingPage`]
//! in native tests.
//!
//! ERROR HANDLING
//! ==============
//! Lookups return `Option`; a missing element is a normal no-op branch.
//! Browser-reported failures on style, class, or navigation writes are logged
//! and dropped since the presenter is display-only.

/// CSS `display` states used for navbar items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

/// A click the presenter can cancel.
pub trait ClickEvent {
    /// Suppress the element's default action (anchor navigation).
    fn prevent_default(&self);
}

/// Host page capabilities used by the presenter.
pub trait Page {
    type Element;
    type Event: ClickEvent + 'static;

    /// Add `class` to `<body>` unless already present.
    fn add_body_class(&self, class: &str);

    /// Look up an element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn set_display(&self, element: &Self::Element, display: Display);

    /// Register `handler` for clicks on `element` for the life of the page.
    fn on_click(&self, element: &Self::Element, handler: Box<dyn Fn(&Self::Event)>);

    /// Full navigation to `path`. The current page is replaced.
    fn navigate(&self, path: &str);
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserPage;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Event, HtmlElement, Window};

    use super::{ClickEvent, Display, Page};
    use crate::store::js_message;

    /// The live document and window.
    pub struct BrowserPage {
        window: Window,
        document: Document,
    }

    impl BrowserPage {
        /// Capture the current window and document, if running in a page.
        pub fn current() -> Option<Self> {
            let window = web_sys::window()?;
            let document = window.document()?;
            Some(Self { window, document })
        }

        pub fn document(&self) -> &Document {
            &self.document
        }
    }

    impl ClickEvent for Event {
        fn prevent_default(&self) {
            Event::prevent_default(self);
        }
    }

    impl Page for BrowserPage {
        type Element = HtmlElement;
        type Event = Event;

        fn add_body_class(&self, class: &str) {
            let Some(body) = self.document.body() else {
                log::warn!("document has no body; skipping {class} marker");
                return;
            };
            if let Err(err) = body.class_list().add_1(class) {
                log::warn!("failed to add body class {class}: {}", js_message(&err));
            }
        }

        fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
            match self.document.get_element_by_id(id)?.dyn_into::<HtmlElement>() {
                Ok(el) => Some(el),
                Err(_) => {
                    log::debug!("#{id} is not an HTML element; ignoring");
                    None
                }
            }
        }

        fn set_display(&self, element: &HtmlElement, display: Display) {
            if let Err(err) = element.style().set_property("display", display.as_css()) {
                log::warn!("failed to set display on #{}: {}", element.id(), js_message(&err));
            }
        }

        fn on_click(&self, element: &HtmlElement, handler: Box<dyn Fn(&Event)>) {
            let cb = Closure::wrap(Box::new(move |event: Event| handler(&event)) as Box<dyn Fn(Event)>);
            if let Err(err) =
                element.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            {
                log::warn!("failed to bind click on #{}: {}", element.id(), js_message(&err));
                return;
            }
            // Listener lives as long as the page does.
            cb.forget();
        }

        fn navigate(&self, path: &str) {
            if let Err(err) = self.window.location().set_href(path) {
                log::error!("navigation to {path} failed: {}", js_message(&err));
            }
        }
    }
}
