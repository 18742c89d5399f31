//! Top-level infalens configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ExtractConfig, ReportConfig};
use crate::errors::ConfigError;
use crate::types::TransformationKind;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`INFALENS_*`)
/// 3. Project config (`infalens.toml` in the working root)
/// 4. User config (`~/.infalens/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InfalensConfig {
    pub extract: ExtractConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub kinds: Option<Vec<String>>,
    pub format: Option<String>,
    pub output: Option<std::path::PathBuf>,
}

impl InfalensConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("infalens.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// Kind names must match a recognized `TYPE` spelling exactly. Format
    /// names are validated later by the reporter factory, which owns the
    /// format list.
    pub fn validate(config: &InfalensConfig) -> Result<(), ConfigError> {
        for name in &config.extract.enabled_kinds {
            if TransformationKind::parse(name).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "extract.enabled_kinds".to_string(),
                    message: format!("unrecognized transformation kind: {name}"),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut InfalensConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: InfalensConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a value set.
    fn merge(base: &mut InfalensConfig, other: &InfalensConfig) {
        if !other.extract.enabled_kinds.is_empty() {
            base.extract.enabled_kinds = other.extract.enabled_kinds.clone();
        }
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
        if other.report.output.is_some() {
            base.report.output = other.report.output.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `INFALENS_EXTRACT_KINDS` (comma-separated), `INFALENS_REPORT_FORMAT`.
    fn apply_env_overrides(config: &mut InfalensConfig) {
        if let Ok(val) = std::env::var("INFALENS_EXTRACT_KINDS") {
            let kinds: Vec<String> = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !kinds.is_empty() {
                config.extract.enabled_kinds = kinds;
            }
        }
        if let Ok(val) = std::env::var("INFALENS_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
        if let Ok(val) = std::env::var("INFALENS_REPORT_OUTPUT") {
            config.report.output = Some(std::path::PathBuf::from(val));
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut InfalensConfig, cli: &CliOverrides) {
        if let Some(ref kinds) = cli.kinds {
            if !kinds.is_empty() {
                config.extract.enabled_kinds = kinds.clone();
            }
        }
        if let Some(ref format) = cli.format {
            config.report.format = Some(format.clone());
        }
        if let Some(ref output) = cli.output {
            config.report.output = Some(output.clone());
        }
    }
}

/// Returns the user config path: `~/.infalens/config.toml`.
fn user_config_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".infalens").join("config.toml"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
