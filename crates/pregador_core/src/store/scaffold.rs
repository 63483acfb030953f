//! First-run filesystem bootstrap.
//!
//! # Responsibility
//! - Guarantee every scaffold directory exists before documents are touched.
//! - Seed sentinel markers and the default document set.
//!
//! # Invariants
//! - Safe to invoke on every process start, including on a fully populated
//!   installation: existing directories, sentinels and documents are never
//!   overwritten, only missing ones are created.
//! - The credentials document is seeded with the single bootstrap account.

use super::json_store::write_json_atomic;
use super::layout::DocumentKey;
use super::{JsonStore, StoreResult};
use crate::auth::password_digest;
use crate::model::config::AppConfig;
use log::{error, info};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Marker file written once into each scaffold directory.
pub const SENTINEL_FILE: &str = ".sentinel";
const SENTINEL_CONTENT: &str = "System Integrity File - Do Not Delete";

/// Username seeded into a fresh credentials document.
pub const BOOTSTRAP_USERNAME: &str = "ADMIN";
const BOOTSTRAP_SEED_PASSWORD: &str = "admin";

/// Idempotently creates the directory tree, sentinels and default documents.
///
/// Directory creation failures abort the bootstrap; a sentinel that cannot
/// be written is logged and skipped, matching the store's best-effort
/// posture for non-document files.
pub fn ensure_scaffold(store: &JsonStore) -> StoreResult<()> {
    info!("event=scaffold_check module=store status=start");

    for dir in store.layout().scaffold_directories() {
        fs::create_dir_all(&dir).map_err(|source| super::StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        ensure_sentinel(&dir);
    }

    let config_path = store.layout().document_path(DocumentKey::Config);
    if !config_path.exists() {
        let default_config = serde_json::to_value(AppConfig::default()).map_err(|source| {
            super::StoreError::Serialize {
                path: config_path.clone(),
                source,
            }
        })?;
        write_json_atomic(&config_path, &default_config)?;
    }

    let users_path = store.layout().document_path(DocumentKey::Users);
    if !users_path.exists() {
        let seeded = json!({ BOOTSTRAP_USERNAME: password_digest(BOOTSTRAP_SEED_PASSWORD) });
        write_json_atomic(&users_path, &seeded)?;
    }

    for key in [
        DocumentKey::NetworkFeed,
        DocumentKey::Members,
        DocumentKey::SoulMetrics,
    ] {
        ensure_empty_list(store, key)?;
    }

    info!("event=scaffold_check module=store status=ok");
    Ok(())
}

fn ensure_sentinel(dir: &Path) {
    let sentinel = dir.join(SENTINEL_FILE);
    if sentinel.exists() {
        return;
    }
    if let Err(err) = fs::write(&sentinel, SENTINEL_CONTENT) {
        error!(
            "event=scaffold_sentinel module=store status=error path={} error={}",
            sentinel.display(),
            err
        );
    }
}

fn ensure_empty_list(store: &JsonStore, key: DocumentKey) -> StoreResult<()> {
    let path = store.layout().document_path(key);
    if path.exists() {
        return Ok(());
    }
    write_json_atomic(&path, &Value::Array(Vec::new()))
}
