//! Fixed names shared between this crate, the page templates, and the login flow.

// ── Storage keys ────────────────────────────────────────────────

/// `localStorage` key holding the session token written by the login page.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// `localStorage` key holding the token type; cleared together with the token.
pub const TOKEN_TYPE_KEY: &str = "tokenType";

// ── Element ids ─────────────────────────────────────────────────

pub const LOGOUT_BUTTON_ID: &str = "logoutButton";
pub const NAV_WELCOME_ID: &str = "navWelcomeItem";
pub const NAV_LOGOUT_ID: &str = "navLogoutItem";
pub const NAV_LOGIN_ID: &str = "navLoginItem";
pub const NAV_SIGNUP_ID: &str = "navSignupItem";

// ── Page ────────────────────────────────────────────────────────

/// Class added to `<body>` once the presenter has run.
pub const SCRIPT_ACTIVE_CLASS: &str = "js-enabled";

/// Server path that finishes logout and redirects to the login page.
pub const LOGOUT_PATH: &str = "/logout";
