//! Error types for the content model generator

use std::path::PathBuf;
use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Generator errors
///
/// Unsupported element types are deliberately absent: they are dropped
/// during generation and only surface through diagnostics.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Invalid output location {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    ConfigLoad(#[from] config_crate::ConfigError),

    #[error("Schema provider error: {0}")]
    Provider(String),

    #[error("Failed to write class {class_name}: {source}")]
    Emit {
        class_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Generation stopped by diagnostics: {0}")]
    Diagnostics(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodegenError {
    /// Create a configuration error for an output location
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an I/O failure raised while writing a class
    pub fn emit(class_name: impl Into<String>, source: std::io::Error) -> Self {
        Self::Emit {
            class_name: class_name.into(),
            source,
        }
    }
}
