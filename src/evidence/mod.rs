//! Evidence block extraction and rewriting for pull request descriptions.
//!
//! Pull request descriptions list four verification artefacts (two
//! screenshots and two Playwright trace outputs), either as an item/link
//! table or as bullet lines. This module finds those links, renders them in
//! a grouped checkbox layout, and splices that layout back into the
//! description. Every function here is pure: fetching and persisting the
//! description is left to the caller.
//!
//! ```
//! use exhibit::evidence::{CheckboxState, EvidenceLabel, extract, format_block};
//!
//! let evidence = extract("- 审核弹窗截图: http://b");
//! assert_eq!(evidence.get(EvidenceLabel::ReviewDialogScreenshot), Some("http://b"));
//!
//! let block = format_block(&evidence, CheckboxState::Unchecked);
//! assert!(block.contains("- [ ] 审核弹窗截图： http://b"));
//! ```

mod diff;
mod extract;
mod format;
mod label;
mod locate;
mod map;
mod normalize;
mod rewrite;

pub use diff::unified_diff;
pub use extract::extract;
pub use format::format_block;
pub use label::{
    EVIDENCE_HEADING_MARKER, EvidenceGroup, EvidenceLabel, SCREENSHOTS_HEADING, TRACE_HEADING,
};
pub use locate::{Placement, replace_block, replace_block_with_placement};
pub use map::{CheckboxState, EvidenceMap, ParseCheckboxError};
pub use normalize::normalize;
pub use rewrite::{Rewrite, rewrite};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
