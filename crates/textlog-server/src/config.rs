// ABOUTME: Configuration loading and validation for textlog.
// ABOUTME: Reads TEXTLOG_* environment variables and validates the bind address and log name.

use std::net::SocketAddr;
use std::path::PathBuf;

use textlog_core::{DEFAULT_LOG_NAME, LogName, NameError};
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TEXTLOG_BIND is not a valid socket address: {0}")]
    InvalidBind(String),

    #[error("TEXTLOG_FILE is not a valid log name: {0}")]
    InvalidLogName(#[from] NameError),
}

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct TextlogConfig {
    pub home: PathBuf,
    pub bind: SocketAddr,
    pub log_name: LogName,
}

impl TextlogConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - TEXTLOG_HOME: application data directory (default: ~/.textlog)
    /// - TEXTLOG_BIND: socket address to bind (default: 127.0.0.1:7341)
    /// - TEXTLOG_FILE: name of the backing text file (default: inttest.txt)
    pub fn from_env() -> Result<Self, ConfigError> {
        let home = std::env::var("TEXTLOG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                std::env::var("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("/tmp"))
                    .join(".textlog")
            });

        let bind_str =
            std::env::var("TEXTLOG_BIND").unwrap_or_else(|_| "127.0.0.1:7341".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let log_name = std::env::var("TEXTLOG_FILE")
            .ok()
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_NAME.to_string());
        let log_name = LogName::new(log_name)?;

        Ok(Self {
            home,
            bind,
            log_name,
        })
    }
}
