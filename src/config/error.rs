//! Error types for configuration system.
//!
//! This module defines all possible error types used in the configuration system.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Missing env var: {0}")]
    MissingEnvVar(String),
    #[error("File not found: {0}")]
    FileNotFound(String),
}
