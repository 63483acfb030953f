//! Backup archive creation.
//!
//! # Responsibility
//! - Archive the whole data root into a timestamped tar file inside the
//!   backup vault.
//!
//! # Invariants
//! - The vault directory itself is excluded from the archive, so backups
//!   never contain earlier backups.
//! - A failed archive leaves no usable-looking file behind.

use crate::store::JsonStore;
use chrono::Local;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::{self, File};
use std::path::PathBuf;

const ARCHIVE_PREFIX: &str = "SystemBackup_";
const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Backup creation error.
#[derive(Debug)]
pub struct BackupError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl Display for BackupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "backup failed at `{}`: {}",
            self.path.display(),
            self.source
        )
    }
}

impl Error for BackupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Backup facade over the data root.
pub struct BackupService<'a> {
    store: &'a JsonStore,
}

impl<'a> BackupService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Creates `SystemBackup_<timestamp>.tar` in the vault and returns its
    /// path.
    pub fn create_backup(&self) -> Result<PathBuf, BackupError> {
        let layout = self.store.layout();
        let vault = layout.backup_vault_dir();
        let vault_name = vault.file_name().map(|name| name.to_os_string());

        let archive_path = vault.join(format!(
            "{ARCHIVE_PREFIX}{}.tar",
            Local::now().format(ARCHIVE_TIMESTAMP_FORMAT)
        ));

        let result = (|| {
            fs::create_dir_all(&vault).map_err(|source| BackupError {
                path: vault.clone(),
                source,
            })?;

            let file = File::create(&archive_path).map_err(|source| BackupError {
                path: archive_path.clone(),
                source,
            })?;
            let mut builder = tar::Builder::new(file);

            let entries = fs::read_dir(layout.root()).map_err(|source| BackupError {
                path: layout.root().to_path_buf(),
                source,
            })?;

            for entry in entries {
                let entry = entry.map_err(|source| BackupError {
                    path: layout.root().to_path_buf(),
                    source,
                })?;
                let path = entry.path();
                if vault_name.as_deref() == Some(entry.file_name().as_os_str()) {
                    continue;
                }

                let name_in_archive = PathBuf::from(entry.file_name());
                let append = if path.is_dir() {
                    builder.append_dir_all(&name_in_archive, &path)
                } else {
                    builder.append_path_with_name(&path, &name_in_archive)
                };
                append.map_err(|source| BackupError {
                    path: path.clone(),
                    source,
                })?;
            }

            builder.finish().map_err(|source| BackupError {
                path: archive_path.clone(),
                source,
            })
        })();

        match result {
            Ok(()) => {
                info!(
                    "event=backup module=service status=ok path={}",
                    archive_path.display()
                );
                Ok(archive_path)
            }
            Err(err) => {
                error!(
                    "event=backup module=service status=error path={} error={}",
                    archive_path.display(),
                    err.source
                );
                let _ = fs::remove_file(&archive_path);
                Err(err)
            }
        }
    }
}
