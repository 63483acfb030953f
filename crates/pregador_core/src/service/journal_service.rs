//! Mood journal use-cases.
//!
//! # Responsibility
//! - Append check-in entries to the soul-metrics document.
//! - Expose recent history and the pastoral health index.
//!
//! # Invariants
//! - Legacy document shapes are normalized on read; the canonical shape is
//!   persisted on the next save.
//! - The health index only ever reflects the last 10 entries.

use crate::model::mood::{MoodEntry, MoodJournal};
use crate::store::{DocumentKey, JsonStore, StoreResult};
use serde_json::{json, Value};

const HEALTH_WINDOW: usize = 10;

/// Qualitative band for the health index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Excellent,
    Good,
    Attention,
    Critical,
}

impl HealthBand {
    fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Attention
        } else {
            Self::Critical
        }
    }
}

/// Aggregated wellbeing indicator over recent check-ins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthIndex {
    /// Mean score over the window, clamped to 0..=100.
    pub score: f64,
    pub band: HealthBand,
}

/// Journal facade over the soul-metrics document.
pub struct JournalService<'a> {
    store: &'a JsonStore,
}

impl<'a> JournalService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Appends a check-in entry and persists the canonical document shape.
    pub fn record(&self, entry: MoodEntry) -> StoreResult<()> {
        let mut journal = self.load();
        journal.push(entry);
        self.store
            .write(DocumentKey::SoulMetrics, &journal.to_document())
    }

    /// Last `count` entries, newest first.
    pub fn recent(&self, count: usize) -> Vec<MoodEntry> {
        self.load().recent(count)
    }

    /// Health index over the last 10 entries; `None` without data.
    ///
    /// Entries without a numeric score count as zero, dragging the index
    /// down rather than being skipped.
    pub fn health_index(&self) -> Option<HealthIndex> {
        let journal = self.load();
        if journal.is_empty() {
            return None;
        }

        let window = journal.recent(HEALTH_WINDOW);
        let sum: f64 = window
            .iter()
            .map(|entry| entry.score.unwrap_or(0.0))
            .sum();
        let mean = sum / window.len() as f64;
        let score = (mean.clamp(0.0, 100.0) * 100.0).round() / 100.0;

        Some(HealthIndex {
            score,
            band: HealthBand::for_score(score),
        })
    }

    fn load(&self) -> MoodJournal {
        let document: Value = self.store.read(DocumentKey::SoulMetrics, json!([]));
        let (journal, _migrated) = MoodJournal::from_document(&document);
        journal
    }
}
