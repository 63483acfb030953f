//! Credential check layered on the document store.
//!
//! # Responsibility
//! - Verify login attempts against the users document.
//! - Create accounts with case-insensitive duplicate rejection.
//! - Carry the per-login session context.
//!
//! # Invariants
//! - Usernames are normalized to uppercase before lookup or insertion.
//! - Passwords are stored only as SHA-256 hex digests.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod access_gate;
pub mod session;

pub use access_gate::{password_digest, AccessGate};
pub use session::Session;

use crate::store::StoreError;

pub type AuthResult<T> = Result<T, AuthError>;

/// Account management error.
#[derive(Debug)]
pub enum AuthError {
    /// The normalized username already exists.
    DuplicateUser(String),
    /// The credentials document could not be persisted.
    Store(StoreError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateUser(username) => write!(f, "duplicate username: {username}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateUser(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
