//! Target extractor — any SQL-bearing attribute (pre/post SQL, overrides).

use infalens_core::types::{LogicRecord, TransformationKind};

use super::{table_attributes, Extractor};
use crate::document::Element;

/// Targets carry their SQL under varying attribute names (`preSQL`,
/// `Post SQL`, table name overrides with embedded SQL). Matching is by
/// case-insensitive substring on the attribute name.
pub struct TargetExtractor;

impl Extractor for TargetExtractor {
    fn kind(&self) -> TransformationKind {
        TransformationKind::Target
    }

    fn extract(&self, node: &Element) -> Vec<LogicRecord> {
        let owner = node.attr_or_empty("NAME");
        let mut records = Vec::new();

        for attr in table_attributes(node) {
            let name = attr.attr_or_empty("NAME");
            if !name.to_lowercase().contains("sql") {
                continue;
            }
            let value = attr.attr_or_empty("VALUE").trim();
            if !value.is_empty() {
                records.push(LogicRecord::new(self.kind(), owner, name, value));
            }
        }

        records
    }
}
