//! Error types for mirror-core

use std::path::PathBuf;

use crate::config::FolderRole;
use crate::constants::{MAX_INTERVAL_SECS, MIN_INTERVAL_SECS};

/// Result type for mirror-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running a sync
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write activity log {path}: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{role} folder is not a valid path: {path}")]
    NotADirectory { role: FolderRole, path: PathBuf },

    #[error("{first} and {second} folders cannot be the same")]
    SamePath {
        first: FolderRole,
        second: FolderRole,
    },

    #[error("{inner} folder cannot be located inside the {outer} folder")]
    NestedPath {
        inner: FolderRole,
        outer: FolderRole,
    },

    #[error(
        "Timer value must be 0 or between {min} and {max} seconds, got {value}",
        min = MIN_INTERVAL_SECS,
        max = MAX_INTERVAL_SECS
    )]
    TimerOutOfRange { value: u64 },

    #[error("No {name} folder given on the command line or in the config file")]
    MissingSetting { name: &'static str },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error was raised while validating settings, before any
    /// sync activity started.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::NotADirectory { .. }
                | Self::SamePath { .. }
                | Self::NestedPath { .. }
                | Self::TimerOutOfRange { .. }
                | Self::MissingSetting { .. }
                | Self::ConfigParse { .. }
                | Self::UnsupportedFormat { .. }
        )
    }
}
