//! Owned element tree for one parsed mapping export.
//!
//! The tree is read-only after parsing and lives for the duration of one
//! extraction call. Attribute lookup is total: a missing attribute is an
//! empty string, never an error.

mod parser;

pub use parser::parse;

use infalens_core::types::{FxHashMap, TransformationKind};

/// One parsed XML element: tag, attributes, child elements.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: FxHashMap<String, String>,
    children: Vec<Element>,
}

impl Element {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute lookup by exact name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Attribute lookup degrading to `""` when absent.
    pub fn attr_or_empty(&self, name: &str) -> &str {
        self.attr(name).unwrap_or("")
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// All nested elements in document (preorder) order, self excluded.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Preorder iterator over an element's descendants.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

/// A parsed mapping export document.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Every `TRANSFORMATION` element whose `TYPE` attribute names `kind`,
    /// at any depth, in document order.
    pub fn transformations_of(
        &self,
        kind: TransformationKind,
    ) -> impl Iterator<Item = &Element> + '_ {
        self.root
            .descendants()
            .filter(move |e| e.tag == "TRANSFORMATION" && e.attr("TYPE") == Some(kind.name()))
    }
}
