//! Core domain logic for the O Pregador sermon-writing assistant.
//! This crate is the single source of truth for storage and business
//! invariants; UI, LLM and web-search layers stay behind collaborator seams.

pub mod assist;
pub mod auth;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;
pub mod util;

pub use assist::{AssistError, AssistMode, SermonAssistant};
pub use auth::{AccessGate, AuthError, Session};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::config::AppConfig;
pub use model::feed::FeedPost;
pub use model::mood::{MoodEntry, MoodJournal};
pub use search::{SearchHit, WebSearch};
pub use service::{
    BackupService, DraftError, DraftService, FeedError, FeedService, HealthBand, HealthIndex,
    JournalService, RoutineService,
};
pub use store::{
    ensure_scaffold, DocumentKey, DocumentStatus, JsonStore, StoreError, StoreLayout, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
