//! Expression extractor — per-field expressions.

use infalens_core::types::{LogicRecord, TransformationKind};

use super::Extractor;
use crate::document::Element;

/// Records every `TRANSFORMFIELD` whose expression carries real logic.
///
/// Pass-through fields carry their own name as the expression; those are
/// skipped, as are fields with a blank expression. The expression text is
/// stored exactly as written.
pub struct ExpressionExtractor;

impl Extractor for ExpressionExtractor {
    fn kind(&self) -> TransformationKind {
        TransformationKind::Expression
    }

    fn extract(&self, node: &Element) -> Vec<LogicRecord> {
        let owner = node.attr_or_empty("NAME");
        let mut records = Vec::new();

        for field_def in node.descendants().filter(|e| e.tag() == "TRANSFORMFIELD") {
            let field = field_def.attr_or_empty("NAME");
            let logic = field_def.attr_or_empty("EXPRESSION");
            if !logic.trim().is_empty() && field != logic {
                records.push(LogicRecord::new(self.kind(), owner, field, logic));
            }
        }

        records
    }
}
