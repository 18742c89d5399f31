//! Source Qualifier extractor — SQL query override.

use infalens_core::types::{LogicRecord, TransformationKind};

use super::{table_attribute_value, Extractor};
use crate::document::Element;

pub struct SourceQualifierExtractor;

impl Extractor for SourceQualifierExtractor {
    fn kind(&self) -> TransformationKind {
        TransformationKind::SourceQualifier
    }

    fn extract(&self, node: &Element) -> Vec<LogicRecord> {
        let sql = table_attribute_value(node, "Sql Query").trim();
        if sql.is_empty() {
            return Vec::new();
        }
        vec![LogicRecord::new(
            self.kind(),
            node.attr_or_empty("NAME"),
            "Source Qualifier SQL",
            sql,
        )]
    }
}
