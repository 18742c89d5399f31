//! Joiner extractor — join condition and source filter.

use infalens_core::types::{LogicRecord, TransformationKind};

use super::{table_attributes, Extractor};
use crate::document::Element;

const JOINER_ATTRIBUTES: [&str; 2] = ["Join Condition", "Source Filter"];

pub struct JoinerExtractor;

impl Extractor for JoinerExtractor {
    fn kind(&self) -> TransformationKind {
        TransformationKind::Joiner
    }

    fn extract(&self, node: &Element) -> Vec<LogicRecord> {
        let owner = node.attr_or_empty("NAME");
        let mut records = Vec::new();

        for attr in table_attributes(node) {
            let name = attr.attr_or_empty("NAME");
            if !JOINER_ATTRIBUTES.contains(&name) {
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
