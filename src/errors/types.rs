//! Error type definitions for the fallback asset server.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level application error type
///
/// Uses `thiserror` for automatic error trait implementations and proper
/// error chaining. Almost everything here is a startup-time failure; the
/// request path has no recoverable errors of its own (a failed lookup is a
/// defined fallthrough, not an error).
#[derive(Error, Debug)]
pub enum AppError {
    /// A placeholder payload could not be read at startup. Fatal: the
    /// server cannot degrade without its placeholders.
    #[error("Failed to load placeholder asset {path}: {source}")]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create an asset-load error for a specific source path
    pub fn asset_load(path: &Path, source: std::io::Error) -> Self {
        Self::AssetLoad {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a configuration error with a custom message
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
