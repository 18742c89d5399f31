//! Configuration system for infalens.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod extract_config;
pub mod infalens_config;
pub mod report_config;

pub use extract_config::ExtractConfig;
pub use infalens_config::{CliOverrides, InfalensConfig};
pub use report_config::ReportConfig;
