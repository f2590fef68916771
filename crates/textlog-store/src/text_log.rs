// ABOUTME: Append-only text log backed by a single flat file.
// ABOUTME: Provides durable append, line-ordered read-back, and truncate-to-empty clear.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use textlog_core::LogName;
use thiserror::Error;

/// The step of a text log operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    Open,
    Read,
    Write,
    Sync,
}

impl fmt::Display for StorageOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StorageOp::Open => "open",
            StorageOp::Read => "read",
            StorageOp::Write => "write",
            StorageOp::Sync => "sync",
        };
        f.write_str(s)
    }
}

/// Any failure to open, read, write, or sync the backing resource.
#[derive(Debug, Error)]
#[error("failed to {op} {}: {source}", .path.display())]
pub struct StorageError {
    pub op: StorageOp,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl StorageError {
    fn new(op: StorageOp, path: &Path, source: io::Error) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A text log over one named file. Each operation opens the file, acts,
/// and drops the handle before returning, so no handle outlives a call
/// regardless of which step fails.
#[derive(Debug, Clone)]
pub struct TextLog {
    name: LogName,
    path: PathBuf,
}

impl TextLog {
    /// Create a text log for `name` inside `dir`. Does not touch the file.
    pub fn new(dir: &Path, name: LogName) -> Self {
        let path = dir.join(name.as_str());
        Self { name, path }
    }

    pub fn name(&self) -> &LogName {
        &self.name
    }

    /// Returns the path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `text` followed by a newline, then fsync. The text and its
    /// terminator go out in a single write so consecutive appends never
    /// interleave within a line.
    pub fn append(&self, text: &str) -> Result<(), StorageError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.err(StorageOp::Open, e))?;

        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');

        file.write_all(line.as_bytes())
            .map_err(|e| self.err(StorageOp::Write, e))?;
        file.sync_all().map_err(|e| self.err(StorageOp::Sync, e))?;

        tracing::debug!(log = %self.name, bytes = line.len(), "appended to text log");
        Ok(())
    }

    /// Read all lines in order, each followed by a newline. A missing file
    /// is created empty and reads as "". Both "\n" and "\r\n" terminators
    /// come back as "\n".
    pub fn read(&self) -> Result<String, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)
                    .map_err(|e| self.err(StorageOp::Open, e))?;
                tracing::debug!(log = %self.name, "created empty text log on first read");
                return Ok(String::new());
            }
            Err(e) => return Err(self.err(StorageOp::Open, e)),
        };

        let reader = BufReader::new(file);
        let mut contents = String::new();
        for line in reader.lines() {
            let line = line.map_err(|e| self.err(StorageOp::Read, e))?;
            contents.push_str(&line);
            contents.push('\n');
        }

        tracing::debug!(log = %self.name, bytes = contents.len(), "read text log");
        Ok(contents)
    }

    /// Truncate the log to empty. The file itself is kept.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut file = File::create(&self.path).map_err(|e| self.err(StorageOp::Open, e))?;
        file.write_all(b"").map_err(|e| self.err(StorageOp::Write, e))?;
        file.sync_all().map_err(|e| self.err(StorageOp::Sync, e))?;

        tracing::info!(log = %self.name, "cleared text log");
        Ok(())
    }

    fn err(&self, op: StorageOp, source: io::Error) -> StorageError {
        StorageError::new(op, &self.path, source)
    }
}
