//! Document parse errors.

use super::error_code::{self, InfalensErrorCode};

/// Errors that can occur while parsing a mapping export document.
///
/// Parsing is all-or-nothing: any of these fails the whole call and no
/// partial record sequence is produced. Absent attributes inside a
/// well-formed document are not errors and never reach this enum.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("XML syntax error at byte {position}: {message}")]
    Syntax { position: u64, message: String },

    #[error("Malformed attribute at byte {position}: {message}")]
    Attribute { position: u64, message: String },

    #[error("Unclosed element <{tag}>")]
    Unclosed { tag: String },

    #[error("Unexpected closing tag at byte {position}")]
    UnexpectedClose { position: u64 },

    #[error("Content after document root at byte {position}")]
    TrailingContent { position: u64 },

    #[error("Document has no root element")]
    NoRoot,
}

impl InfalensErrorCode for DocumentError {
    fn error_code(&self) -> &'static str {
        error_code::DOCUMENT_ERROR
    }
}
