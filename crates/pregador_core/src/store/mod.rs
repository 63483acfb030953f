//! Filesystem-backed JSON document store.
//!
//! # Responsibility
//! - Own the physical representation of every named JSON document.
//! - Provide read-with-default and atomic whole-file replace primitives.
//! - Bootstrap the fixed directory scaffold before normal operation.
//!
//! # Invariants
//! - A document on disk is always fully the previous version or fully the
//!   new version, never a partial write.
//! - Read paths never fail the caller; absence and corruption degrade to the
//!   caller-supplied default, distinguishable via [`DocumentStatus`].
//! - Scaffold creation is idempotent and never overwrites existing documents.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod json_store;
pub mod layout;
pub mod scaffold;

pub use json_store::JsonStore;
pub use layout::{DocumentKey, StoreLayout};
pub use scaffold::ensure_scaffold;

pub type StoreResult<T> = Result<T, StoreError>;

/// Write-path error for document persistence.
///
/// Read paths deliberately have no error type: they degrade to the default
/// value and report through [`DocumentStatus`].
#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "document I/O failed at `{}`: {source}", path.display())
            }
            Self::Serialize { path, source } => {
                write!(
                    f,
                    "document serialization failed for `{}`: {source}",
                    path.display()
                )
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize { source, .. } => Some(source),
        }
    }
}

/// Outcome of a document read, alongside the returned value.
///
/// `Missing` and `Corrupt` both substitute the caller's default; the split
/// exists so callers can surface corruption instead of silently conflating
/// it with a fresh installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    /// File existed and parsed as JSON.
    Loaded,
    /// File did not exist; the default was returned.
    Missing,
    /// File existed but was empty, unreadable, or unparseable; the default
    /// was returned and a warning was logged.
    Corrupt,
}
