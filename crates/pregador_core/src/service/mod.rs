//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store reads and atomic write-backs into use-case APIs.
//! - Keep the UI layer decoupled from document shapes and file paths.
//!
//! # Invariants
//! - Every mutation is a full-document read-modify-write; services never
//!   patch files in place.

pub mod backup_service;
pub mod doctrine;
pub mod draft_service;
pub mod feed_service;
pub mod journal_service;
pub mod routine_service;

pub use backup_service::{BackupError, BackupService};
pub use doctrine::scan_doctrine;
pub use draft_service::{DraftError, DraftService};
pub use feed_service::{FeedError, FeedService};
pub use journal_service::{HealthBand, HealthIndex, JournalService};
pub use routine_service::RoutineService;
