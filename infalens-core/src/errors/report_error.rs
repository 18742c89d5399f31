//! Report generation errors.

use super::error_code::{self, InfalensErrorCode};

/// Errors that can occur while rendering the logic table.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Unknown report format: {format}")]
    UnknownFormat { format: String },

    #[error("Spreadsheet serialization failed: {message}")]
    Spreadsheet { message: String },

    #[error("Report serialization failed: {message}")]
    Serialization { message: String },
}

impl InfalensErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownFormat { .. } => error_code::UNKNOWN_FORMAT,
            _ => error_code::REPORT_ERROR,
        }
    }
}
