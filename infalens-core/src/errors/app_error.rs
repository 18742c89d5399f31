//! Top-level application errors.

use std::path::PathBuf;

use super::error_code::{self, InfalensErrorCode};
use super::{ConfigError, DocumentError, ReportError};

/// Errors surfaced at the application boundary.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl InfalensErrorCode for AppError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Document(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
            Self::ReadInput { .. } | Self::WriteOutput { .. } => error_code::IO_ERROR,
        }
    }
}
