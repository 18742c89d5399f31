//! Lookup Procedure extractor — SQL override and lookup condition.

use infalens_core::types::{LogicRecord, TransformationKind};

use super::{table_attribute_value, Extractor};
use crate::document::Element;

pub struct LookupExtractor;

impl Extractor for LookupExtractor {
    fn kind(&self) -> TransformationKind {
        TransformationKind::LookupProcedure
    }

    fn extract(&self, node: &Element) -> Vec<LogicRecord> {
        let owner = node.attr_or_empty("NAME");
        let mut records = Vec::new();

        let sql_override = table_attribute_value(node, "Lookup Sql Override").trim();
        if !sql_override.is_empty() {
            records.push(LogicRecord::new(
                self.kind(),
                owner,
                "Lookup SQL Override",
                sql_override,
            ));
        }

        // The dialect spells the condition attribute with a lowercase 'c'.
        let condition = table_attribute_value(node, "Lookup condition").trim();
        if !condition.is_empty() {
            records.push(LogicRecord::new(
                self.kind(),
                owner,
                "Lookup Condition",
                condition,
            ));
        }

        records
    }
}
