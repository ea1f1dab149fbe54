//! The four fixed evidence labels and their bullet-line patterns.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Whitespace that does not cross a line break.
const INLINE_SPACE: &str = r"[^\S\r\n]";

/// Heading line that introduces the screenshot group.
pub const SCREENSHOTS_HEADING: &str = "截图";

/// Heading line that introduces the trace group.
pub const TRACE_HEADING: &str = "Trace";

/// Marker phrase of the "verification evidence" section heading.
pub const EVIDENCE_HEADING_MARKER: &str = "验证证据";

/// One of the four evidence items a pull request description must list.
///
/// Variants are declared in rendering order, so the derived `Ord` sorts the
/// screenshot group ahead of the trace group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EvidenceLabel {
    /// Screenshot of the page before the application is submitted.
    SubmissionScreenshot,
    /// Screenshot of the review dialog.
    ReviewDialogScreenshot,
    /// Playwright trace archive.
    TraceArchive,
    /// Rendered Playwright trace report.
    TraceReport,
}

/// Output group an evidence label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceGroup {
    /// Screenshot items, rendered under [`SCREENSHOTS_HEADING`].
    Screenshots,
    /// Trace items, rendered under [`TRACE_HEADING`].
    Trace,
}

impl EvidenceGroup {
    /// Heading line rendered above the group.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Screenshots => SCREENSHOTS_HEADING,
            Self::Trace => TRACE_HEADING,
        }
    }

    /// Labels in this group, in rendering order.
    #[must_use]
    pub const fn labels(self) -> [EvidenceLabel; 2] {
        match self {
            Self::Screenshots => [
                EvidenceLabel::SubmissionScreenshot,
                EvidenceLabel::ReviewDialogScreenshot,
            ],
            Self::Trace => [EvidenceLabel::TraceArchive, EvidenceLabel::TraceReport],
        }
    }
}

impl EvidenceLabel {
    /// All labels in rendering order.
    pub const ALL: [Self; 4] = [
        Self::SubmissionScreenshot,
        Self::ReviewDialogScreenshot,
        Self::TraceArchive,
        Self::TraceReport,
    ];

    /// The literal label text as it appears in descriptions.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::SubmissionScreenshot => "申请前截图（页面）",
            Self::ReviewDialogScreenshot => "审核弹窗截图",
            Self::TraceArchive => "Playwright Trace 压缩包",
            Self::TraceReport => "Trace Report HTML",
        }
    }

    /// Looks up a label by its exact text.
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.text() == text)
    }

    /// Group the label is rendered under.
    #[must_use]
    pub const fn group(self) -> EvidenceGroup {
        match self {
            Self::SubmissionScreenshot | Self::ReviewDialogScreenshot => EvidenceGroup::Screenshots,
            Self::TraceArchive | Self::TraceReport => EvidenceGroup::Trace,
        }
    }

    /// Bullet pattern capturing the URL token in group 1.
    pub(super) fn bullet_pattern(self) -> &'static Regex {
        let patterns = &*BULLET_PATTERNS;
        match self {
            Self::SubmissionScreenshot => &patterns[0],
            Self::ReviewDialogScreenshot => &patterns[1],
            Self::TraceArchive => &patterns[2],
            Self::TraceReport => &patterns[3],
        }
    }

    /// Whether the line is a bullet for any label, with or without a URL.
    pub(super) fn is_bullet_line(line: &str) -> bool {
        BULLET_LINE_PATTERNS
            .iter()
            .any(|pattern| pattern.is_match(line))
    }
}

impl fmt::Display for EvidenceLabel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.text())
    }
}

/// Bullet prefix up to and including the colon: a dash, an optional
/// checkbox, and the label text whose inner spaces match any run of inline
/// whitespace (including none).
fn bullet_prefix(label: EvidenceLabel) -> String {
    let body = label
        .text()
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(&format!("{INLINE_SPACE}*"));
    format!(r"-{INLINE_SPACE}*(?:\[[ xX]\]{INLINE_SPACE}*)?{body}[:：]")
}

#[expect(
    clippy::expect_used,
    reason = "bullet patterns are built from fixed literals exercised by unit tests"
)]
static BULLET_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    EvidenceLabel::ALL.map(|label| {
        let source = format!(r"{}{INLINE_SPACE}*(\S+)", bullet_prefix(label));
        Regex::new(&source).expect("evidence bullet pattern should compile")
    })
});

#[expect(
    clippy::expect_used,
    reason = "bullet patterns are built from fixed literals exercised by unit tests"
)]
static BULLET_LINE_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    EvidenceLabel::ALL.map(|label| {
        Regex::new(&bullet_prefix(label)).expect("evidence bullet pattern should compile")
    })
});

#[expect(
    clippy::expect_used,
    reason = "table patterns are fixed literals exercised by unit tests"
)]
static TABLE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|\s*项目\s*\|\s*链接\s*\|\s*$").expect("table header pattern should compile")
});

#[expect(
    clippy::expect_used,
    reason = "table patterns are fixed literals exercised by unit tests"
)]
static TABLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|\s*-+\s*\|\s*-+\s*\|\s*$").expect("table separator pattern should compile")
});

#[expect(
    clippy::expect_used,
    reason = "table patterns are fixed literals exercised by unit tests"
)]
static TABLE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|\s*(.*?)\s*\|\s*(\S+)\s*\|\s*$").expect("table row pattern should compile")
});

/// Location of an item/link table inside a document's lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct TableSpan {
    /// Index of the header row.
    pub(super) start: usize,
    /// One past the last body row.
    pub(super) end: usize,
}

impl TableSpan {
    /// Index of the first body row.
    pub(super) const fn body_start(self) -> usize {
        self.start + 2
    }
}

/// Finds the first header and separator pair and the pipe rows following it.
pub(super) fn find_table(lines: &[&str]) -> Option<TableSpan> {
    let start = lines.windows(2).position(|pair| {
        matches!(pair, [header, separator]
            if TABLE_HEADER.is_match(header) && TABLE_SEPARATOR.is_match(separator))
    })?;
    let body_rows = lines
        .iter()
        .skip(start + 2)
        .take_while(|line| line.trim().starts_with('|'))
        .count();
    Some(TableSpan {
        start,
        end: start + 2 + body_rows,
    })
}

/// Splits a table body row into its label and link cells.
pub(super) fn table_row_cells(line: &str) -> Option<(&str, &str)> {
    let captures = TABLE_ROW.captures(line)?;
    let label = captures.get(1)?.as_str().trim();
    let link = captures.get(2)?.as_str().trim();
    Some((label, link))
}
