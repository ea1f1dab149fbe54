//! Locating an existing evidence block and splicing in a replacement.
//!
//! Strategies are tried in a fixed order and the first one that applies
//! wins: an item/link table, a run of label bullets, insertion below the
//! evidence heading, and finally prepending to the whole document.

use std::ops::Range;

use super::label::{
    EVIDENCE_HEADING_MARKER, EvidenceLabel, SCREENSHOTS_HEADING, TRACE_HEADING, find_table,
};

/// Maximum number of heading or blank lines absorbed above the first bullet.
const MAX_UPWARD_STEPS: usize = 2;

/// Which strategy [`replace_block`] applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// An item/link table was replaced.
    Table,
    /// A run of label bullets was replaced.
    Bullets,
    /// The block was inserted after the evidence heading.
    AfterHeading,
    /// The block was prepended to the document.
    Prepended,
}

/// Replaces the evidence block in `document` with `block`.
///
/// See [`replace_block_with_placement`] for the strategy that was used.
#[must_use]
pub fn replace_block(document: &str, block: &str) -> String {
    replace_block_with_placement(document, block).0
}

/// Replaces the evidence block and reports which strategy applied.
#[must_use]
pub fn replace_block_with_placement(document: &str, block: &str) -> (String, Placement) {
    let lines: Vec<&str> = document.lines().collect();

    if let Some(span) = find_table(&lines) {
        return (splice(&lines, span.start..span.end, block), Placement::Table);
    }

    if let Some(span) = bullet_span(&lines) {
        return (splice(&lines, span, block), Placement::Bullets);
    }

    if let Some(index) = lines
        .iter()
        .position(|line| line.contains(EVIDENCE_HEADING_MARKER))
    {
        return (
            splice(&lines, index + 1..index + 1, block),
            Placement::AfterHeading,
        );
    }

    (format!("{block}\n\n{document}"), Placement::Prepended)
}

/// Replaces `range` of `lines` with the lines of `block`.
fn splice(lines: &[&str], range: Range<usize>, block: &str) -> String {
    let before = lines.get(..range.start).unwrap_or_default();
    let after = lines.get(range.end..).unwrap_or_default();

    before
        .iter()
        .copied()
        .chain(block.lines())
        .chain(after.iter().copied())
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_heading_or_blank(line: &str) -> bool {
    matches!(line.trim(), SCREENSHOTS_HEADING | TRACE_HEADING | "")
}

/// Computes the contiguous span covering every label bullet plus adjacent
/// group headings and blank lines.
pub(super) fn bullet_span(lines: &[&str]) -> Option<Range<usize>> {
    let matched: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| EvidenceLabel::is_bullet_line(line))
        .map(|(index, _)| index)
        .collect();
    let (first, last) = (matched.first()?, matched.last()?);

    let start = scan_upward(lines, *first);
    let end = scan_downward(lines, *last);
    Some(start..end + 1)
}

/// Extends `start` upward over at most [`MAX_UPWARD_STEPS`] heading or blank
/// lines.
///
/// Blank lines at the head of the extension are given back so the gap
/// between the text above and the block survives repeated rewrites.
fn scan_upward(lines: &[&str], start: usize) -> usize {
    let mut index = start;
    for _ in 0..MAX_UPWARD_STEPS {
        let Some(previous) = index.checked_sub(1) else {
            break;
        };
        match lines.get(previous) {
            Some(line) if is_heading_or_blank(line) => index = previous,
            _ => break,
        }
    }
    while index < start && lines.get(index).is_some_and(|line| line.trim().is_empty()) {
        index += 1;
    }
    index
}

/// Extends `end` downward while the next line is a heading, blank, or
/// another label bullet.
///
/// Blank lines at the tail of the extension are given back so the gap
/// between the block and the text after it survives repeated rewrites.
fn scan_downward(lines: &[&str], end: usize) -> usize {
    let mut index = end;
    while let Some(next) = lines.get(index + 1) {
        if is_heading_or_blank(next) || EvidenceLabel::is_bullet_line(next) {
            index += 1;
        } else {
            break;
        }
    }
    while index > end && lines.get(index).is_some_and(|line| line.trim().is_empty()) {
        index -= 1;
    }
    index
}
