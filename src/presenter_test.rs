use super::*;
use crate::page::Display;
use crate::recording::RecordingPage;
use crate::store::MemoryStore;
use crate::test_support::FailingStore;

const ALL_IDS: [&str; 5] = [
    "logoutButton",
    "navWelcomeItem",
    "navLogoutItem",
    "navLoginItem",
    "navSignupItem",
];

fn visibility(page: &RecordingPage) -> [Option<Display>; 4] {
    [
        page.display("navWelcomeItem"),
        page.display("navLogoutItem"),
        page.display("navLoginItem"),
        page.display("navSignupItem"),
    ]
}

const SIGNED_IN: [Option<Display>; 4] =
    [Some(Display::Block), Some(Display::Block), Some(Display::None), Some(Display::None)];
const SIGNED_OUT: [Option<Display>; 4] =
    [Some(Display::None), Some(Display::None), Some(Display::Block), Some(Display::Block)];

// =============================================================
// Body marker
// =============================================================

#[test]
fn marks_body_for_every_store_state() {
    for token in [None, Some(""), Some("abc123")] {
        let page = Rc::new(RecordingPage::with_elements(ALL_IDS));
        let store = Rc::new(MemoryStore::new());
        if let Some(t) = token {
            store.set("accessToken", t);
        }
        initialize(&page, &store).unwrap();
        assert_eq!(page.body_classes(), vec!["js-enabled".to_owned()]);
    }
}

#[test]
fn marker_is_not_duplicated_across_runs() {
    let page = Rc::new(RecordingPage::new());
    let store = Rc::new(MemoryStore::new());
    initialize(&page, &store).unwrap();
    initialize(&page, &store).unwrap();
    assert_eq!(page.body_classes(), vec!["js-enabled".to_owned()]);
}

// =============================================================
// Page-load scenarios
// =============================================================

#[test]
fn signed_in_load() {
    let page = Rc::new(RecordingPage::with_elements(ALL_IDS));
    let store = Rc::new(MemoryStore::with_entries([("accessToken", "abc123")]));
    assert_eq!(initialize(&page, &store).unwrap(), SessionState::SignedIn);
    assert_eq!(visibility(&page), SIGNED_IN);
    assert!(page.navigations().is_empty());
}

#[test]
fn signed_out_load() {
    let page = Rc::new(RecordingPage::with_elements(ALL_IDS));
    let store = Rc::new(MemoryStore::new());
    assert_eq!(initialize(&page, &store).unwrap(), SessionState::SignedOut);
    assert_eq!(visibility(&page), SIGNED_OUT);
}

#[test]
fn empty_token_load_is_signed_out() {
    let page = Rc::new(RecordingPage::with_elements(ALL_IDS));
    let store = Rc::new(MemoryStore::with_entries([("accessToken", "")]));
    assert_eq!(initialize(&page, &store).unwrap(), SessionState::SignedOut);
    assert_eq!(visibility(&page), SIGNED_OUT);
}

#[test]
fn logout_click_after_load_clears_and_redirects() {
    let page = Rc::new(RecordingPage::with_elements(ALL_IDS));
    let store = Rc::new(MemoryStore::with_entries([
        ("accessToken", "abc123"),
        ("tokenType", "bearer"),
    ]));
    initialize(&page, &store).unwrap();

    let event = page.click("logoutButton").unwrap();
    assert!(event.default_prevented());
    assert!(!store.contains("accessToken"));
    assert!(!store.contains("tokenType"));
    assert_eq!(page.location().as_deref(), Some("/logout"));
}

#[test]
fn missing_logout_control_still_syncs_navbar() {
    let page = Rc::new(RecordingPage::with_elements(ALL_IDS[1..].iter().copied()));
    let store = Rc::new(MemoryStore::with_entries([("accessToken", "abc123")]));
    assert!(initialize(&page, &store).is_ok());
    assert_eq!(visibility(&page), SIGNED_IN);
    assert_eq!(page.handler_count("logoutButton"), 0);

    let page = Rc::new(RecordingPage::with_elements(ALL_IDS[1..].iter().copied()));
    let store = Rc::new(MemoryStore::new());
    assert!(initialize(&page, &store).is_ok());
    assert_eq!(visibility(&page), SIGNED_OUT);
}

#[test]
fn two_loads_give_same_visibility() {
    let page = Rc::new(RecordingPage::with_elements(ALL_IDS));
    let store = Rc::new(MemoryStore::with_entries([("accessToken", "abc123")]));
    initialize(&page, &store).unwrap();
    let first = visibility(&page);
    initialize(&page, &store).unwrap();
    assert_eq!(visibility(&page), first);
    assert_eq!(first, SIGNED_IN);
}

#[test]
fn reload_after_logout_shows_guest_items() {
    let store = Rc::new(MemoryStore::with_entries([
        ("accessToken", "abc123"),
        ("tokenType", "bearer"),
    ]));

    let page = Rc::new(RecordingPage::with_elements(ALL_IDS));
    initialize(&page, &store).unwrap();
    page.click("logoutButton").unwrap();

    let next_page = Rc::new(RecordingPage::with_elements(ALL_IDS));
    assert_eq!(initialize(&next_page, &store).unwrap(), SessionState::SignedOut);
    assert_eq!(visibility(&next_page), SIGNED_OUT);
}

// =============================================================
// Failures
// =============================================================

#[test]
fn read_failure_keeps_marker_and_logout_binding() {
    let page = Rc::new(RecordingPage::with_elements(ALL_IDS));
    let store = Rc::new(FailingStore {
        inner: MemoryStore::with_entries([("accessToken", "abc123")]),
        fail_reads: true,
        ..FailingStore::default()
    });

    assert!(matches!(initialize(&page, &store), Err(StoreError::Read { .. })));
    assert_eq!(page.body_classes(), vec!["js-enabled".to_owned()]);
    assert_eq!(visibility(&page), [None; 4]);

    page.click("logoutButton").unwrap();
    assert!(!store.inner.contains("accessToken"));
    assert_eq!(page.location().as_deref(), Some("/logout"));
}

#[test]
fn custom_config_marker_and_ids() {
    let config = PresenterConfig {
        active_class: "wasm-ready".to_owned(),
        logout_button_id: "signOut".to_owned(),
        ..PresenterConfig::default()
    };
    let page = Rc::new(RecordingPage::with_elements(["signOut", "logoutButton"]));
    let store = Rc::new(MemoryStore::with_entries([("accessToken", "abc123")]));

    initialize_with(&page, &store, &config).unwrap();
    assert_eq!(page.body_classes(), vec!["wasm-ready".to_owned()]);
    assert_eq!(page.handler_count("signOut"), 1);
    assert_eq!(page.handler_count("logoutButton"), 0);
}

#[test]
fn unavailable_storage_still_marks_body_and_binds_logout() {
    let page = Rc::new(RecordingPage::with_elements(ALL_IDS));
    let unavailable = StoreError::Unavailable("SecurityError".to_owned());
    let store: Rc<Result<MemoryStore, StoreError>> = Rc::new(Err(unavailable.clone()));

    assert_eq!(initialize(&page, &store), Err(unavailable));
    assert_eq!(page.body_classes(), vec!["js-enabled".to_owned()]);
    assert_eq!(page.handler_count("logoutButton"), 1);
    assert_eq!(visibility(&page), [None; 4]);

    let event = page.click("logoutButton").unwrap();
    assert!(event.default_prevented());
    assert_eq!(page.location().as_deref(), Some("/logout"));
}
