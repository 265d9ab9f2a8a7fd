//! Presenter configuration.
//!
//! The default matches the ids and keys baked into the server templates.
//! Hosts embedding the presenter under different markup can build their own.

use crate::consts::{
    ACCESS_TOKEN_KEY, LOGOUT_BUTTON_ID, LOGOUT_PATH, NAV_LOGIN_ID, NAV_LOGOUT_ID, NAV_SIGNUP_ID,
    NAV_WELCOME_ID, SCRIPT_ACTIVE_CLASS, TOKEN_TYPE_KEY,
};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Names of everything the presenter reads, writes, or looks up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresenterConfig {
    pub access_token_key: String,
    pub token_type_key: String,
    pub logout_button_id: String,
    pub welcome_item_id: String,
    pub logout_item_id: String,
    pub login_item_id: String,
    pub signup_item_id: String,
    pub active_class: String,
    pub logout_path: String,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            access_token_key: ACCESS_TOKEN_KEY.to_owned(),
            token_type_key: TOKEN_TYPE_KEY.to_owned(),
            logout_button_id: LOGOUT_BUTTON_ID.to_owned(),
            welcome_item_id: NAV_WELCOME_ID.to_owned(),
            logout_item_id: NAV_LOGOUT_ID.to_owned(),
            login_item_id: NAV_LOGIN_ID.to_owned(),
            signup_item_id: NAV_SIGNUP_ID.to_owned(),
            active_class: SCRIPT_ACTIVE_CLASS.to_owned(),
            logout_path: LOGOUT_PATH.to_owned(),
        }
    }
}

impl PresenterConfig {
    /// Storage keys removed on logout, token first.
    pub fn credential_keys(&self) -> [&str; 2] {
        [&self.access_token_key, &self.token_type_key]
    }
}
