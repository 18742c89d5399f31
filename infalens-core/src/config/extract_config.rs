//! Extraction configuration.

use serde::{Deserialize, Serialize};

use crate::types::TransformationKind;

/// Configuration for the extraction subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractConfig {
    /// Transformation kinds to extract, by `TYPE` spelling.
    /// Empty means all recognized kinds, in priority order.
    pub enabled_kinds: Vec<String>,
}

impl ExtractConfig {
    /// Resolve the effective kind list, preserving priority order.
    ///
    /// Selection narrows the fixed list; it never reorders it. Returns the
    /// full list when no kinds are configured.
    pub fn effective_kinds(&self) -> Vec<TransformationKind> {
        if self.enabled_kinds.is_empty() {
            return TransformationKind::all().to_vec();
        }
        TransformationKind::all()
            .iter()
            .copied()
            .filter(|k| self.enabled_kinds.iter().any(|n| n == k.name()))
            .collect()
    }
}
