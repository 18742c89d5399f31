//! Per-kind logic extractors.
//!
//! Each recognized transformation kind has one extractor implementing the
//! [`Extractor`] trait; [`extractor_for`] is the fixed dispatch table. An
//! extractor is a total function over a well-formed node: absent attributes
//! read as empty strings and simply produce no records.

pub mod expression;
pub mod joiner;
pub mod lookup;
pub mod router;
pub mod source_qualifier;
pub mod sql;
pub mod target;
pub mod update_strategy;

use infalens_core::types::{LogicRecord, TransformationKind};

use crate::document::Element;

/// Trait that every kind extractor must implement.
pub trait Extractor: Send + Sync {
    /// The transformation kind this extractor handles.
    fn kind(&self) -> TransformationKind;

    /// Extract logic records from one transformation node.
    /// Never fails; a node with nothing to extract yields an empty vec.
    fn extract(&self, node: &Element) -> Vec<LogicRecord>;
}

/// Dispatch table keyed by kind.
pub fn extractor_for(kind: TransformationKind) -> &'static dyn Extractor {
    match kind {
        TransformationKind::Expression => &expression::ExpressionExtractor,
        TransformationKind::LookupProcedure => &lookup::LookupExtractor,
        TransformationKind::SourceQualifier => &source_qualifier::SourceQualifierExtractor,
        TransformationKind::Router => &router::RouterExtractor,
        TransformationKind::Joiner => &joiner::JoinerExtractor,
        TransformationKind::UpdateStrategy => &update_strategy::UpdateStrategyExtractor,
        TransformationKind::Sql => &sql::SqlExtractor,
        TransformationKind::Target => &target::TargetExtractor,
    }
}

/// `TABLEATTRIBUTE` descendants of a transformation node, document order.
pub(crate) fn table_attributes(node: &Element) -> impl Iterator<Item = &Element> {
    node.descendants().filter(|e| e.tag() == "TABLEATTRIBUTE")
}

/// `VALUE` of the first `TABLEATTRIBUTE` with the given `NAME`, or `""`.
pub(crate) fn table_attribute_value<'a>(node: &'a Element, name: &str) -> &'a str {
    table_attributes(node)
        .find(|e| e.attr("NAME") == Some(name))
        .map(|e| e.attr_or_empty("VALUE"))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_covers_every_kind() {
        for kind in TransformationKind::all() {
            assert_eq!(extractor_for(*kind).kind(), *kind);
        }
    }
}
