//! End-to-end rewrite of a description's evidence block.

use super::extract::extract;
use super::format::format_block;
use super::locate::{Placement, replace_block_with_placement};
use super::map::{CheckboxState, EvidenceMap};
use super::normalize::normalize;

/// Outcome of rewriting a document's evidence block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Evidence URLs that were rendered.
    pub evidence: EvidenceMap,
    /// The rewritten document.
    pub updated: String,
    /// Strategy used to place the block.
    pub placement: Placement,
    /// Whether the rewrite differs from the input after normalisation.
    pub changed: bool,
}

/// Rewrites the evidence block of `document` in grouped checkbox form.
///
/// A complete `supplied` map takes precedence; otherwise URLs are extracted
/// from the document itself. Callers should skip persisting the result when
/// [`Rewrite::changed`] is false.
#[must_use]
pub fn rewrite(
    document: &str,
    supplied: Option<&EvidenceMap>,
    checkbox: CheckboxState,
) -> Rewrite {
    let evidence = match supplied {
        Some(map) if map.is_complete() => map.clone(),
        _ => extract(document),
    };
    let block = format_block(&evidence, checkbox);
    let (updated, placement) = replace_block_with_placement(document, &block);
    let changed = normalize(document) != normalize(&updated);

    tracing::debug!(?placement, changed, labels = evidence.len(), "evidence block rewritten");

    Rewrite {
        evidence,
        updated,
        placement,
        changed,
    }
}
