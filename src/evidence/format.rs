//! Rendering of the grouped checkbox evidence block.

use super::label::EvidenceGroup;
use super::map::{CheckboxState, EvidenceMap};

/// Full-width colon followed by a single space, as used in rendered items.
const ITEM_SEPARATOR: &str = "： ";

/// Renders the grouped evidence block.
///
/// The block has a screenshot group and a trace group separated by one
/// blank line. Every item carries the same checkbox glyph; labels without a
/// URL render with an empty value. No trailing newline is emitted.
#[must_use]
pub fn format_block(evidence: &EvidenceMap, checkbox: CheckboxState) -> String {
    [EvidenceGroup::Screenshots, EvidenceGroup::Trace]
        .into_iter()
        .map(|group| format_group(group, evidence, checkbox))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_group(group: EvidenceGroup, evidence: &EvidenceMap, checkbox: CheckboxState) -> String {
    let mut lines = vec![group.heading().to_owned()];
    lines.extend(group.labels().into_iter().map(|label| {
        format!(
            "- {glyph} {label}{ITEM_SEPARATOR}{url}",
            glyph = checkbox.glyph(),
            url = evidence.url_or_empty(label),
        )
    }));
    lines.join("\n")
}
