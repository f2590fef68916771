// ABOUTME: Storage manager for the application-scoped data directory.
// ABOUTME: Creates the private files directory and resolves log names into text logs inside it.

use std::fs;
use std::path::{Path, PathBuf};

use textlog_core::LogName;
use thiserror::Error;

use crate::text_log::TextLog;

/// Errors that can occur while preparing the storage layout.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("failed to create storage directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Owns the application's home directory. Every text log lives in
/// `<home>/files/`, which is private to this application.
#[derive(Debug, Clone)]
pub struct StorageManager {
    home: PathBuf,
}

impl StorageManager {
    /// Create a StorageManager rooted at the given home directory.
    /// Creates the home and files subdirectories if they do not exist.
    pub fn new(home: PathBuf) -> Result<Self, ManagerError> {
        let files_dir = home.join("files");
        fs::create_dir_all(&files_dir).map_err(|source| ManagerError::CreateDir {
            path: files_dir.clone(),
            source,
        })?;
        tracing::debug!("storage ready at {}", files_dir.display());
        Ok(Self { home })
    }

    /// Return the home directory path.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Path of the private files directory.
    pub fn files_dir(&self) -> PathBuf {
        self.home.join("files")
    }

    /// Resolve `name` to a text log inside the files directory.
    /// The backing file is created lazily by the first operation.
    pub fn open_log(&self, name: &LogName) -> TextLog {
        TextLog::new(&self.files_dir(), name.clone())
    }
}
