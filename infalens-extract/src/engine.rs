//! The extraction pipeline.
//!
//! One pass over the document per kind, kinds in fixed priority order,
//! document order preserved within each kind. Parsing is the only fallible
//! step; extraction over a parsed tree is total.

use infalens_core::errors::DocumentError;
use infalens_core::types::{LogicRecord, TransformationKind};
use tracing::debug;

use crate::document::{self, Document};
use crate::extractors::extractor_for;

/// Extract logic records from an already-parsed document.
///
/// `kinds` narrows the pass list; callers wanting the full fixed order pass
/// [`TransformationKind::all`]. Running this twice on the same document
/// yields an identical sequence.
pub fn extract(document: &Document, kinds: &[TransformationKind]) -> Vec<LogicRecord> {
    let mut records = Vec::new();

    for kind in kinds {
        let extractor = extractor_for(*kind);
        let before = records.len();
        for node in document.transformations_of(*kind) {
            records.extend(extractor.extract(node));
        }
        debug!(kind = kind.name(), records = records.len() - before, "extracted");
    }

    // Defensive second pass over the collected records. The per-kind rules
    // already enforce both conditions, so this is idempotent.
    records.retain(|r| !r.logic.trim().is_empty() && r.field != r.logic);

    records
}

/// Parse raw export bytes and extract with the full fixed kind order.
pub fn extract_from_bytes(bytes: &[u8]) -> Result<Vec<LogicRecord>, DocumentError> {
    extract_from_bytes_with_kinds(bytes, TransformationKind::all())
}

/// Parse raw export bytes and extract the given kinds.
pub fn extract_from_bytes_with_kinds(
    bytes: &[u8],
    kinds: &[TransformationKind],
) -> Result<Vec<LogicRecord>, DocumentError> {
    let document = document::parse(bytes)?;
    Ok(extract(&document, kinds))
}
