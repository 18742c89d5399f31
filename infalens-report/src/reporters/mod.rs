//! Reporters — output formats for the logic table.

pub mod console;
pub mod json;
pub mod xlsx;

use infalens_core::errors::ReportError;

use crate::table::LogicTable;

/// What a reporter produces: terminal/file text, or opaque bytes.
#[derive(Debug, Clone)]
pub enum ReportOutput {
    Text(String),
    Binary(Vec<u8>),
}

impl ReportOutput {
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(s) => s.into_bytes(),
            Self::Binary(b) => b,
        }
    }
}

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, table: &LogicTable) -> Result<ReportOutput, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::default())),
        "json" => Some(Box::new(json::JsonReporter)),
        "xlsx" => Some(Box::new(xlsx::XlsxReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json", "xlsx"]
}
