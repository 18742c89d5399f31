//! Router extractor — per-group filter conditions.

use infalens_core::types::{LogicRecord, TransformationKind};

use super::Extractor;
use crate::document::Element;

/// Records each `GROUP` with a non-blank `CONDITION`, labelled
/// `Group: {name}`. The default group has no condition and is skipped.
pub struct RouterExtractor;

impl Extractor for RouterExtractor {
    fn kind(&self) -> TransformationKind {
        TransformationKind::Router
    }

    fn extract(&self, node: &Element) -> Vec<LogicRecord> {
        let owner = node.attr_or_empty("NAME");
        let mut records = Vec::new();

        for group in node.descendants().filter(|e| e.tag() == "GROUP") {
            let condition = group.attr_or_empty("CONDITION").trim();
            if !condition.is_empty() {
                records.push(LogicRecord::new(
                    self.kind(),
                    owner,
                    format!("Group: {}", group.attr_or_empty("NAME")),
                    condition,
                ));
            }
        }

        records
    }
}
