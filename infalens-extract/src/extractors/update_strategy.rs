//! Update Strategy extractor — the strategy expression.

use infalens_core::types::{LogicRecord, TransformationKind};

use super::{table_attributes, Extractor};
use crate::document::Element;

pub struct UpdateStrategyExtractor;

impl Extractor for UpdateStrategyExtractor {
    fn kind(&self) -> TransformationKind {
        TransformationKind::UpdateStrategy
    }

    fn extract(&self, node: &Element) -> Vec<LogicRecord> {
        let owner = node.attr_or_empty("NAME");
        let mut records = Vec::new();

        for attr in table_attributes(node) {
            if attr.attr("NAME") != Some("Update Strategy Expression") {
                continue;
            }
            let value = attr.attr_or_empty("VALUE").trim();
            if !value.is_empty() {
                records.push(LogicRecord::new(
                    self.kind(),
                    owner,
                    "Update Strategy",
                    value,
                ));
            }
        }

        records
    }
}
