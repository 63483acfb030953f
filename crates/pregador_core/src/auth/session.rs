//! Per-login session context.
//!
//! # Responsibility
//! - Carry the authenticated user identity and the in-memory API credential
//!   between operations.
//!
//! # Invariants
//! - A session exists only between a successful verify and logout; there is
//!   no ambient global session state.
//! - The API credential never touches disk.

use super::AccessGate;

/// Context for one login-to-logout span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
    api_credential: Option<String>,
}

impl Session {
    /// Opens a session when the supplied credentials verify.
    pub fn open(gate: &AccessGate<'_>, username: &str, password: &str) -> Option<Self> {
        if !gate.verify(username, password) {
            return None;
        }
        Some(Self {
            username: username.to_uppercase(),
            api_credential: None,
        })
    }

    /// Uppercase-normalized identity of the logged-in user.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Stores the external-assistant credential for this session only.
    pub fn set_api_credential(&mut self, credential: impl Into<String>) {
        self.api_credential = Some(credential.into());
    }

    pub fn api_credential(&self) -> Option<&str> {
        self.api_credential.as_deref()
    }

    /// Ends the session. Dropping the value has the same effect; the method
    /// exists to make logout explicit at call sites.
    pub fn close(self) {}
}
