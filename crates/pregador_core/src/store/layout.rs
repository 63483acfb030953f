//! Storage topology: the fixed directory scaffold and document paths.
//!
//! # Responsibility
//! - Map logical document keys to physical file paths.
//! - Enumerate the directory set the scaffold must guarantee.
//!
//! # Invariants
//! - Paths are derived, never stored; relocating the root relocates the
//!   whole tree.
//! - Document keys are a closed set; callers cannot invent ad-hoc paths.

use std::path::{Path, PathBuf};

/// Default root directory for a local installation.
pub const DEFAULT_ROOT: &str = "Dados_Pregador_V31";

const SERMONS_DIR: &str = "Sermoes";
const GABINETE_DIR: &str = "Gabinete_Pastoral";
const USER_CONFIG_DIR: &str = "User_Data";
const BACKUP_VAULT_DIR: &str = "Auto_Backup_Oculto";
const LIBRARY_CACHE_DIR: &str = "BibliaCache";
const MEMBERSHIP_DIR: &str = "Membresia";
const NETWORK_DIR: &str = "Rede_Ministerial";
const LOG_DIR: &str = "System_Logs";

/// Logical name of a whole-file JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKey {
    /// Theme, security level and routine checklist.
    Config,
    /// Username -> password digest mapping.
    Users,
    /// Mood journal history.
    SoulMetrics,
    /// Usage counters; shape is caller-driven.
    Stats,
    /// Membership records; shape is caller-driven.
    Members,
    /// Ministry network feed, newest first.
    NetworkFeed,
}

impl DocumentKey {
    /// All known document keys, in scaffold order.
    pub const ALL: [DocumentKey; 6] = [
        DocumentKey::Config,
        DocumentKey::Users,
        DocumentKey::SoulMetrics,
        DocumentKey::Stats,
        DocumentKey::Members,
        DocumentKey::NetworkFeed,
    ];

    /// On-disk file name of this document.
    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKey::Config => "config.json",
            DocumentKey::Users => "users_db.json",
            DocumentKey::SoulMetrics => "soul_data.json",
            DocumentKey::Stats => "db_stats.json",
            DocumentKey::Members => "members.json",
            DocumentKey::NetworkFeed => "feed_data.json",
        }
    }
}

/// Resolver for every path the store touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    root: PathBuf,
}

impl StoreLayout {
    /// Creates a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at [`DEFAULT_ROOT`] in the working directory.
    pub fn default_root() -> Self {
        Self::new(DEFAULT_ROOT)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Sermon draft storage, one subdirectory per user.
    pub fn sermons_dir(&self) -> PathBuf {
        self.root.join(SERMONS_DIR)
    }

    /// Pastoral-care data (mood journal).
    pub fn gabinete_dir(&self) -> PathBuf {
        self.root.join(GABINETE_DIR)
    }

    /// User configuration and credentials.
    pub fn user_config_dir(&self) -> PathBuf {
        self.root.join(USER_CONFIG_DIR)
    }

    /// Backup archive vault.
    pub fn backup_vault_dir(&self) -> PathBuf {
        self.root.join(BACKUP_VAULT_DIR)
    }

    /// Cache for ingested library assets.
    pub fn library_cache_dir(&self) -> PathBuf {
        self.root.join(LIBRARY_CACHE_DIR)
    }

    /// Membership data.
    pub fn membership_dir(&self) -> PathBuf {
        self.root.join(MEMBERSHIP_DIR)
    }

    /// Shared ministry network feed.
    pub fn network_dir(&self) -> PathBuf {
        self.root.join(NETWORK_DIR)
    }

    /// Log output directory.
    pub fn log_dir(&self) -> PathBuf {
        self.root.join(LOG_DIR)
    }

    /// Every directory the scaffold must guarantee, root first.
    pub fn scaffold_directories(&self) -> Vec<PathBuf> {
        vec![
            self.root.clone(),
            self.sermons_dir(),
            self.gabinete_dir(),
            self.user_config_dir(),
            self.backup_vault_dir(),
            self.library_cache_dir(),
            self.membership_dir(),
            self.network_dir(),
            self.log_dir(),
        ]
    }

    /// Physical path of a logical document.
    pub fn document_path(&self, key: DocumentKey) -> PathBuf {
        let dir = match key {
            DocumentKey::Config | DocumentKey::Users | DocumentKey::Stats => {
                self.user_config_dir()
            }
            DocumentKey::SoulMetrics => self.gabinete_dir(),
            DocumentKey::Members => self.membership_dir(),
            DocumentKey::NetworkFeed => self.network_dir(),
        };
        dir.join(key.file_name())
    }
}
