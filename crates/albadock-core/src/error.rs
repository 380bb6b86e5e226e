//! Core error types for albadock-core.
//!
//! The domain evaluators (recurrence, gate, session, stimulus) are total
//! over well-formed in-memory inputs and never return errors; everything
//! here belongs to the storage and configuration boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Alarm store errors.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Failed to resolve or create the data directory
    #[error("Failed to open alarm store at {path}: {message}")]
    OpenFailed { path: PathBuf, message: String },

    /// Failed to persist the alarm list
    #[error("Failed to write alarm store at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No alarm with the given id
    #[error("No alarm with id '{0}'")]
    AlarmNotFound(String),

    /// An alarm must ring on at least one weekday to be persisted
    #[error("Alarm has no weekdays selected")]
    EmptyDays,

    /// Serialization failed
    #[error("Failed to serialize alarm list: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to re-serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
}
