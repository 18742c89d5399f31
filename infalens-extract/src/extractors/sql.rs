//! SQL transformation extractor — query and user-defined join.

use infalens_core::types::{LogicRecord, TransformationKind};

use super::{table_attributes, Extractor};
use crate::document::Element;

const SQL_ATTRIBUTES: [&str; 2] = ["Sql Query", "User Defined Join"];

pub struct SqlExtractor;

impl Extractor for SqlExtractor {
    fn kind(&self) -> TransformationKind {
        TransformationKind::Sql
    }

    fn extract(&self, node: &Element) -> Vec<LogicRecord> {
        let owner = node.attr_or_empty("NAME");
        let mut records = Vec::new();

        for attr in table_attributes(node) {
            let name = attr.attr_or_empty("NAME");
            if !SQL_ATTRIBUTES.contains(&name) {
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
