//! Report configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the reporting subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format name. Default: "console".
    pub format: Option<String>,
    /// Output path. Default: stdout for text formats.
    pub output: Option<PathBuf>,
}

impl ReportConfig {
    /// Returns the effective format, defaulting to "console".
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or("console")
    }
}
