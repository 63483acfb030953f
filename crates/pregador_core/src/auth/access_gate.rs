//! Login verification and account creation.
//!
//! # Responsibility
//! - Compare supplied passwords against stored digests.
//! - Persist new accounts through the store's atomic write.
//!
//! # Invariants
//! - Lookup and insertion always use the uppercase-normalized username.
//! - Verification never mutates the credentials document.

use super::{AuthError, AuthResult};
use crate::store::{DocumentKey, JsonStore};
use log::warn;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

// Matched against the raw input, not the normalized username.
const BOOTSTRAP_PAIR: (&str, &str) = ("ADMIN", "1234");

/// SHA-256 hex digest used for stored passwords.
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Gatekeeper over the users document.
pub struct AccessGate<'a> {
    store: &'a JsonStore,
}

impl<'a> AccessGate<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Checks a login attempt.
    ///
    /// Bootstrap rule: the exact pair `ADMIN`/`1234` succeeds unconditionally
    /// while the users document holds at most one entry. This is a standing
    /// escape hatch for the very first login, open for as long as the store
    /// stays at one account or fewer; see DESIGN.md for the recorded
    /// ambiguity around that window.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let users = self.users_document();

        if username == BOOTSTRAP_PAIR.0 && password == BOOTSTRAP_PAIR.1 && users.len() <= 1 {
            return true;
        }

        let normalized = username.to_uppercase();
        let stored = match users.get(&normalized).and_then(Value::as_str) {
            Some(hash) => hash.to_string(),
            None => {
                warn!(
                    "event=login_check module=auth status=denied user={normalized} reason=unknown_user"
                );
                return false;
            }
        };

        if password_digest(password) == stored {
            return true;
        }

        warn!("event=login_check module=auth status=denied user={normalized} reason=bad_password");
        false
    }

    /// Creates an account, rejecting case-insensitive duplicates.
    ///
    /// Succeeds only if the updated credentials document was persisted.
    pub fn create_account(&self, username: &str, password: &str) -> AuthResult<()> {
        let normalized = username.to_uppercase();
        let mut users = self.users_document();

        if users.contains_key(&normalized) {
            return Err(AuthError::DuplicateUser(normalized));
        }

        users.insert(normalized, Value::String(password_digest(password)));
        self.store
            .write(DocumentKey::Users, &Value::Object(users))?;
        Ok(())
    }

    fn users_document(&self) -> Map<String, Value> {
        match self.store.read(DocumentKey::Users, Value::Object(Map::new())) {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}
