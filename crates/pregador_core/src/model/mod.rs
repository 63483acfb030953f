//! Domain models for the persisted JSON documents.
//!
//! # Responsibility
//! - Define the typed shapes of the config, mood-journal and feed documents.
//! - Keep on-disk field names stable for existing installations.
//!
//! # Invariants
//! - Models tolerate partially populated documents on read (serde defaults);
//!   writes always emit the canonical field names.

pub mod config;
pub mod feed;
pub mod mood;
