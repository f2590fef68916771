// ABOUTME: Defines LogName, the validated identifier of a backing text resource.
// ABOUTME: Names are plain file names that always resolve inside the private files directory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The well-known log used when no other name is configured.
pub const DEFAULT_LOG_NAME: &str = "inttest.txt";

/// Errors that can occur when validating a log name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("log name must not be empty")]
    Empty,

    #[error("log name must not be '.' or '..': {0}")]
    Relative(String),

    #[error("log name must be a plain file name without separators or NUL bytes: {0}")]
    InvalidChar(String),
}

/// Identifier of a single flat text resource. A LogName is a bare file
/// name: it never contains a path separator, so joining it onto a
/// directory cannot escape that directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogName(String);

impl LogName {
    /// Validate and wrap a log name.
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if name == "." || name == ".." {
            return Err(NameError::Relative(name));
        }
        if name.contains(['/', '\\', '\0']) {
            return Err(NameError::InvalidChar(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LogName {
    fn default() -> Self {
        Self(DEFAULT_LOG_NAME.to_string())
    }
}

impl fmt::Display for LogName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LogName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LogName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogName> for String {
    fn from(name: LogName) -> Self {
        name.0
    }
}

impl AsRef<str> for LogName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
