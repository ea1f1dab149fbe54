//! Evidence URL extraction from pull request descriptions.

use super::label::{EvidenceLabel, find_table, table_row_cells};
use super::map::EvidenceMap;

/// Extracts evidence URLs from a document.
///
/// Bullet lines are scanned first; when fewer than four labels are found
/// the first item/link table contributes its rows as well. Any subset of
/// labels may be returned.
#[must_use]
pub fn extract(document: &str) -> EvidenceMap {
    let mut evidence = bullet_entries(document);
    if evidence.is_complete() {
        return evidence;
    }

    let lines: Vec<&str> = document.lines().collect();
    evidence.extend(table_entries(&lines));
    evidence
}

fn bullet_entries(document: &str) -> EvidenceMap {
    EvidenceLabel::ALL
        .into_iter()
        .filter_map(|label| {
            let captures = label.bullet_pattern().captures(document)?;
            let url = captures.get(1)?.as_str();
            Some((label, url.to_owned()))
        })
        .collect()
}

fn table_entries(lines: &[&str]) -> Vec<(EvidenceLabel, String)> {
    let Some(span) = find_table(lines) else {
        return Vec::new();
    };

    lines
        .get(span.body_start()..span.end)
        .unwrap_or_default()
        .iter()
        .filter_map(|row| {
            let (label_text, link) = table_row_cells(row)?;
            let label = EvidenceLabel::from_text(label_text)?;
            Some((label, link.to_owned()))
        })
        .collect()
}
