use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::docs::DocsError;

/// Error types for the fidldoc application.
///
/// Covers loading of interchange models and render options plus failures
/// surfaced by the documentation pipeline itself.
#[derive(Error, Debug)]
pub enum FidldocError {
    /// I/O operation error with file context
    #[error("I/O error on '{path}': {details}")]
    Io {
        /// Path where the I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Model interchange parsing error
    #[error("failed to parse model at {location}: {details}")]
    ModelParse {
        /// Location of the model being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// TOML options parsing error
    #[error("failed to parse options at {location}: {details}")]
    TomlParse {
        /// Location of the TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Documentation pipeline error
    #[error(transparent)]
    Docs(#[from] DocsError),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FidldocError>;

impl FidldocError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(error: impl std::fmt::Display, path: &Path) -> Self {
        FidldocError::Io {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Wraps a model parse error with its source location.
    pub fn model_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        FidldocError::ModelParse {
            location: location_of(path),
            details: error.to_string(),
        }
    }

    /// Wraps a TOML parse error with its source location.
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        FidldocError::TomlParse {
            location: location_of(path),
            details: error.to_string(),
        }
    }
}

fn location_of(path: Option<&Path>) -> String {
    match path {
        Some(path) => {
            let clean_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
            format!("'{}'", clean_path.display())
        }
        None => "string".to_string(),
    }
}
