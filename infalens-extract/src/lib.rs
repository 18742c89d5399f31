//! # infalens-extract
//!
//! Extraction engine for Informatica mapping exports.
//! Parses the export XML into an owned element tree, then runs one pass
//! per recognized transformation kind, dispatching to the kind's extractor
//! and collecting flat [`LogicRecord`](infalens_core::types::LogicRecord)s.

pub mod document;
pub mod engine;
pub mod extractors;

pub use document::{Document, Element};
pub use engine::{extract, extract_from_bytes, extract_from_bytes_with_kinds};
pub use extractors::{extractor_for, Extractor};
