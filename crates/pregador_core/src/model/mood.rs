//! Mood journal document model.
//!
//! # Responsibility
//! - Define the check-in entry shape and the journal document around it.
//! - Normalize the legacy document shapes still found in the field.
//!
//! # Invariants
//! - The canonical document shape is `{"historico": [entry, ...]}`; a bare
//!   list (or anything else) is migrated in memory on read and persisted in
//!   canonical shape on the next save.
//! - Legacy entry field names (`estado`, `obs`, `pontuacao`) are accepted on
//!   read forever; writes emit only the canonical names.
//! - Unreadable entries are preserved verbatim, never dropped on rewrite.

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Timestamp format used by journal entries.
pub const ENTRY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

const HISTORY_KEY: &str = "historico";

/// One mood check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    #[serde(rename = "data")]
    pub recorded_at: String,
    #[serde(rename = "humor", alias = "estado")]
    pub mood: String,
    #[serde(rename = "nota", alias = "obs")]
    pub note: String,
    /// Optional numeric wellbeing score used by the health index.
    #[serde(
        rename = "score",
        alias = "pontuacao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<f64>,
}

impl MoodEntry {
    /// Creates an entry timestamped now, in local time.
    pub fn new(mood: impl Into<String>, note: impl Into<String>) -> Self {
        Self::with_timestamp(
            Local::now().format(ENTRY_TIMESTAMP_FORMAT).to_string(),
            mood,
            note,
        )
    }

    /// Creates an entry with a caller-provided timestamp.
    pub fn with_timestamp(
        recorded_at: impl Into<String>,
        mood: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            recorded_at: recorded_at.into(),
            mood: mood.into(),
            note: note.into(),
            score: None,
        }
    }

    /// Decodes a raw journal item, degrading field-by-field instead of
    /// rejecting the entry.
    pub fn from_raw(raw: &Value) -> Self {
        match raw.as_object() {
            Some(map) => Self {
                recorded_at: string_field(map, &["data"]),
                mood: string_field(map, &["humor", "estado"]),
                note: string_field(map, &["nota", "obs"]),
                score: number_field(map, &["score", "pontuacao"]),
            },
            None => Self {
                recorded_at: raw
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| raw.to_string()),
                mood: "-".to_string(),
                note: "-".to_string(),
                score: raw.as_f64(),
            },
        }
    }
}

fn string_field(map: &Map<String, Value>, keys: &[&str]) -> String {
    for key in keys {
        if let Some(value) = map.get(*key) {
            return value
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string());
        }
    }
    "-".to_string()
}

fn number_field(map: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    for key in keys {
        if let Some(value) = map.get(*key) {
            if let Some(number) = value.as_f64() {
                return Some(number);
            }
            if let Some(parsed) = value.as_str().and_then(|text| text.parse::<f64>().ok()) {
                return Some(parsed);
            }
        }
    }
    None
}

/// In-memory journal, decoupled from the legacy document shapes.
///
/// Raw entries are kept as stored so a rewrite never loses fields this
/// version does not model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodJournal {
    entries: Vec<Value>,
}

impl MoodJournal {
    /// Builds a journal from a document in any known shape.
    ///
    /// Returns the journal and whether the document needs a rewrite to reach
    /// the canonical shape.
    pub fn from_document(document: &Value) -> (Self, bool) {
        match document {
            Value::Object(map) => match map.get(HISTORY_KEY) {
                Some(Value::Array(items)) => (
                    Self {
                        entries: items.clone(),
                    },
                    false,
                ),
                _ => (Self::default(), true),
            },
            Value::Array(items) => (
                Self {
                    entries: items.clone(),
                },
                true,
            ),
            _ => (Self::default(), true),
        }
    }

    /// Canonical document shape for persistence.
    pub fn to_document(&self) -> Value {
        json!({ HISTORY_KEY: self.entries })
    }

    pub fn push(&mut self, entry: MoodEntry) {
        // Serializing a plain struct of strings and an optional number
        // cannot fail.
        if let Ok(raw) = serde_json::to_value(&entry) {
            self.entries.push(raw);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last `count` entries, newest first.
    pub fn recent(&self, count: usize) -> Vec<MoodEntry> {
        self.entries
            .iter()
            .rev()
            .take(count)
            .map(MoodEntry::from_raw)
            .collect()
    }
}
