//! Sermon draft file storage.
//!
//! # Responsibility
//! - Save, load and list per-user draft text files under the sermons
//!   directory.
//!
//! # Invariants
//! - Draft file names are sanitized titles; a title that sanitizes to
//!   nothing is rejected before any I/O.
//! - Drafts are plain UTF-8 text files, one per title, replaced wholesale
//!   on save.

use crate::store::JsonStore;
use crate::util::text::sanitize_filename;
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

const DRAFT_EXTENSION: &str = "txt";

/// Draft storage error.
#[derive(Debug)]
pub enum DraftError {
    /// The title contains no usable filename characters.
    EmptyTitle(String),
    /// No draft with this title exists for the user.
    NotFound { user: String, title: String },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle(title) => write!(f, "unusable draft title: `{title}`"),
            Self::NotFound { user, title } => {
                write!(f, "draft not found for {user}: `{title}`")
            }
            Self::Io { path, source } => {
                write!(f, "draft I/O failed at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for DraftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Draft facade over the per-user sermons directories.
pub struct DraftService<'a> {
    store: &'a JsonStore,
}

impl<'a> DraftService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Saves a draft, creating the user's directory on demand.
    ///
    /// Returns the path the draft was written to.
    pub fn save(&self, user: &str, title: &str, body: &str) -> Result<PathBuf, DraftError> {
        let path = self.draft_path(user, title)?;
        let dir = self.user_dir(user);

        fs::create_dir_all(&dir).map_err(|source| {
            log_io_error(&dir, &source);
            DraftError::Io { path: dir.clone(), source }
        })?;

        fs::write(&path, body).map_err(|source| {
            log_io_error(&path, &source);
            DraftError::Io { path: path.clone(), source }
        })?;
        Ok(path)
    }

    /// Loads a draft body by title.
    pub fn load(&self, user: &str, title: &str) -> Result<String, DraftError> {
        let path = self.draft_path(user, title)?;
        match fs::read_to_string(&path) {
            Ok(body) => Ok(body),
            Err(source) if source.kind() == ErrorKind::NotFound => Err(DraftError::NotFound {
                user: user.to_uppercase(),
                title: title.to_string(),
            }),
            Err(source) => {
                log_io_error(&path, &source);
                Err(DraftError::Io { path, source })
            }
        }
    }

    /// Draft titles (file stems) for a user, newest-sorting first.
    ///
    /// A user with no directory yet simply has no drafts.
    pub fn list(&self, user: &str) -> Vec<String> {
        let dir = self.user_dir(user);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut titles: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .map(|ext| ext == DRAFT_EXTENSION)
                    .unwrap_or(false)
            })
            .filter_map(|path| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .collect();
        titles.sort_by(|a, b| b.cmp(a));
        titles
    }

    fn user_dir(&self, user: &str) -> PathBuf {
        self.store
            .layout()
            .sermons_dir()
            .join(user.to_uppercase())
    }

    fn draft_path(&self, user: &str, title: &str) -> Result<PathBuf, DraftError> {
        let clean = sanitize_filename(title);
        if clean.is_empty() {
            return Err(DraftError::EmptyTitle(title.to_string()));
        }
        Ok(self
            .user_dir(user)
            .join(format!("{clean}.{DRAFT_EXTENSION}")))
    }
}

fn log_io_error(path: &std::path::Path, err: &std::io::Error) {
    error!(
        "event=draft_io module=service status=error path={} error={}",
        path.display(),
        err
    );
}
