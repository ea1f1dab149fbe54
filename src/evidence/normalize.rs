//! Whitespace and punctuation canonicalisation for change detection.

use std::sync::LazyLock;

use regex::Regex;

#[expect(
    clippy::expect_used,
    reason = "fixed literal pattern exercised by unit tests"
)]
static FULL_WIDTH_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"：\s*").expect("colon pattern should compile"));

/// Canonicalises a document so that cosmetic differences compare equal.
///
/// Line endings are unified, trailing spaces and tabs are stripped, every
/// full-width colon is followed by exactly one space, blank runs collapse to
/// one empty line, and the whole text is trimmed. The result is only used
/// to decide whether a rewrite changed anything.
#[must_use]
pub fn normalize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n");
    let mut lines: Vec<String> = Vec::new();
    let mut previous_blank = false;

    for raw in unified.split('\n') {
        let stripped = raw.trim_end_matches([' ', '\t']);
        let line = FULL_WIDTH_COLON.replace_all(stripped, "： ");
        if line.trim().is_empty() {
            if !previous_blank {
                lines.push(String::new());
            }
            previous_blank = true;
        } else {
            lines.push(line.into_owned());
            previous_blank = false;
        }
    }

    lines.join("\n").trim().to_owned()
}
