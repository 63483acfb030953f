//! Document read/write primitives.
//!
//! # Responsibility
//! - Read whole-file JSON documents with a caller-supplied default fallback.
//! - Replace documents atomically via unique temp file + rename.
//!
//! # Invariants
//! - `read` never returns an error; absence and corruption degrade to the
//!   default and are reported through [`DocumentStatus`].
//! - A failed write leaves the previous document byte-identical on disk.
//! - Serialized output is 4-space indented UTF-8 with non-ASCII characters
//!   stored literally.

use super::layout::{DocumentKey, StoreLayout};
use super::{DocumentStatus, StoreError, StoreResult};
use log::{error, info, warn};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use uuid::Uuid;

/// Store facade over one [`StoreLayout`].
///
/// All operations are synchronous, blocking, whole-file reads and writes.
/// There is no locking across a read-modify-write cycle; concurrent writers
/// to the same key are last-writer-wins at the rename step.
#[derive(Debug, Clone)]
pub struct JsonStore {
    layout: StoreLayout,
}

impl JsonStore {
    pub fn new(layout: StoreLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &StoreLayout {
        &self.layout
    }

    /// Reads a document, substituting `default` on absence or corruption.
    ///
    /// Keeps the permissive contract: no failure reaches the caller. Use
    /// [`JsonStore::read_with_status`] to distinguish a missing document
    /// from a corrupt one.
    pub fn read(&self, key: DocumentKey, default: Value) -> Value {
        self.read_with_status(key, default).0
    }

    /// Reads a document and reports how the value was obtained.
    pub fn read_with_status(&self, key: DocumentKey, default: Value) -> (Value, DocumentStatus) {
        let path = self.layout.document_path(key);
        read_json_path(&path, default)
    }

    /// Atomically replaces a document with `value`.
    ///
    /// The value is serialized to a uniquely named temp file in the target
    /// directory, then renamed over the target in one step. On any failure
    /// the previous document is untouched and the temp file is removed on a
    /// best-effort basis.
    pub fn write(&self, key: DocumentKey, value: &Value) -> StoreResult<()> {
        let path = self.layout.document_path(key);
        write_json_atomic(&path, value)
    }
}

pub(crate) fn read_json_path(path: &Path, default: Value) -> (Value, DocumentStatus) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return (default, DocumentStatus::Missing);
        }
        Err(err) => {
            warn!(
                "event=document_read module=store status=corrupt path={} error={}",
                path.display(),
                err
            );
            return (default, DocumentStatus::Corrupt);
        }
    };

    if content.trim().is_empty() {
        warn!(
            "event=document_read module=store status=corrupt path={} error=empty_file",
            path.display()
        );
        return (default, DocumentStatus::Corrupt);
    }

    match serde_json::from_str(&content) {
        Ok(value) => (value, DocumentStatus::Loaded),
        Err(err) => {
            warn!(
                "event=document_read module=store status=corrupt path={} error={}",
                path.display(),
                err
            );
            (default, DocumentStatus::Corrupt)
        }
    }
}

pub(crate) fn write_json_atomic(path: &Path, value: &Value) -> StoreResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| {
            error!(
                "event=document_write module=store status=error path={} error={}",
                path.display(),
                source
            );
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
    }

    let bytes = to_indented_json(value).map_err(|source| {
        error!(
            "event=document_write module=store status=error path={} error={}",
            path.display(),
            source
        );
        StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let temp_path = temp_sibling(path);

    if let Err(source) = fs::write(&temp_path, &bytes) {
        error!(
            "event=document_write module=store status=error path={} error={}",
            temp_path.display(),
            source
        );
        let _ = fs::remove_file(&temp_path);
        return Err(StoreError::Io {
            path: temp_path,
            source,
        });
    }

    if let Err(source) = fs::rename(&temp_path, path) {
        error!(
            "event=document_write module=store status=error path={} error={}",
            path.display(),
            source
        );
        let _ = fs::remove_file(&temp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    info!(
        "event=document_write module=store status=ok path={} bytes={}",
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Serializes with 4-space indentation; serde_json leaves non-ASCII
/// characters unescaped, matching the on-disk document format.
fn to_indented_json(value: &Value) -> Result<Vec<u8>, serde_json::Error> {
    use serde::Serialize;
    use serde_json::ser::{PrettyFormatter, Serializer};

    let mut bytes = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut bytes, formatter);
    value.serialize(&mut serializer)?;
    Ok(bytes)
}

fn temp_sibling(path: &Path) -> std::path::PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    path.with_file_name(format!(
        "{file_name}.tmp.{}",
        Uuid::new_v4().simple()
    ))
}

#[cfg(test)]
mod tests {
    use super::to_indented_json;
    use serde_json::json;

    #[test]
    fn serialization_uses_four_space_indent() {
        let bytes = to_indented_json(&json!({"chave": 1})).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "{\n    \"chave\": 1\n}");
    }

    #[test]
    fn serialization_keeps_non_ascii_literal() {
        let bytes = to_indented_json(&json!({"titulo": "Oração e Comunhão"})).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Oração e Comunhão"));
        assert!(!text.contains("\\u"));
    }
}
