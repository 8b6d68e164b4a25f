//! Authentication state.
//!
//! Holds the access token, session id and basic auth credentials of one
//! client and derives the `X-MT-Authorization` header from them.

use std::fmt;

use serde_json::Value;

/// Credentials with lifetime beyond a single call. Empty string means absent.
#[derive(Clone, Default)]
pub struct Credentials {
    access_token: String,
    session_id: String,
    basic_auth_username: String,
    basic_auth_password: String,
}

impl Credentials {
    /// Credentials with basic auth set and no token or session.
    pub fn with_basic_auth(username: &str, password: &str) -> Self {
        Self {
            basic_auth_username: username.to_string(),
            basic_auth_password: password.to_string(),
            ..Self::default()
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn has_token(&self) -> bool {
        !self.access_token.is_empty()
    }

    pub fn has_session(&self) -> bool {
        !self.session_id.is_empty()
    }

    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = token.into();
    }

    pub fn set_session_id(&mut self, session: impl Into<String>) {
        self.session_id = session.into();
    }

    pub fn set_basic_auth(&mut self, username: &str, password: &str) {
        self.basic_auth_username = username.to_string();
        self.basic_auth_password = password.to_string();
    }

    /// Forget the access token.
    pub fn reset_token(&mut self) {
        self.access_token.clear();
    }

    /// Forget the session id.
    pub fn reset_session(&mut self) {
        self.session_id.clear();
    }

    /// Forget token and session. Basic auth is left alone.
    pub fn reset(&mut self) {
        self.reset_token();
        self.reset_session();
    }

    /// Store `accessToken` and `sessionId` from an auth response when present.
    pub fn absorb(&mut self, payload: &Value) {
        if let Some(token) = payload.get("accessToken").and_then(Value::as_str) {
            self.access_token = token.to_string();
        }
        if let Some(session) = payload.get("sessionId").and_then(Value::as_str) {
            self.session_id = session.to_string();
        }
    }

    /// Value for `X-MT-Authorization`, if any.
    ///
    /// The token always wins. The session is only used when the call asks
    /// for it.
    pub fn auth_header(&self, use_session: bool) -> Option<String> {
        if self.has_token() {
            Some(format!("MTAuth accessToken={}", self.access_token))
        } else if use_session && self.has_session() {
            Some(format!("MTAuth sessionId={}", self.session_id))
        } else {
            None
        }
    }

    /// Basic auth pair, only when both halves are set.
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        if self.basic_auth_username.is_empty() || self.basic_auth_password.is_empty() {
            None
        } else {
            Some((&self.basic_auth_username, &self.basic_auth_password))
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("has_token", &self.has_token())
            .field("has_session", &self.has_session())
            .field("basic_auth_username", &self.basic_auth_username)
            .finish()
    }
}
