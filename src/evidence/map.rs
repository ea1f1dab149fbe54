//! Evidence URL mapping and checkbox state.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use super::label::EvidenceLabel;

/// URLs keyed by evidence label.
///
/// A map may hold any subset of the four labels; missing entries render as
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceMap {
    urls: BTreeMap<EvidenceLabel, String>,
}

impl EvidenceMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the URL for a label, replacing any previous value.
    pub fn insert(&mut self, label: EvidenceLabel, url: impl Into<String>) {
        self.urls.insert(label, url.into());
    }

    /// URL recorded for the label, if any.
    #[must_use]
    pub fn get(&self, label: EvidenceLabel) -> Option<&str> {
        self.urls.get(&label).map(String::as_str)
    }

    /// URL recorded for the label, or an empty string.
    #[must_use]
    pub fn url_or_empty(&self, label: EvidenceLabel) -> &str {
        self.get(label).unwrap_or_default()
    }

    /// Number of labels with a recorded URL.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether no label has a URL.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Whether all four labels have a URL.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        EvidenceLabel::ALL
            .iter()
            .all(|label| self.urls.contains_key(label))
    }

    /// Iterates over recorded entries in label order.
    pub fn iter(&self) -> impl Iterator<Item = (EvidenceLabel, &str)> {
        self.urls.iter().map(|(label, url)| (*label, url.as_str()))
    }

    /// Parses a JSON object keyed by label text.
    ///
    /// Keys that are not one of the four label texts, and values that are not
    /// strings, are ignored.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the input is not a JSON object.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        let object: BTreeMap<String, Value> = serde_json::from_str(input)?;
        Ok(object
            .iter()
            .filter_map(|(key, value)| {
                let label = EvidenceLabel::from_text(key)?;
                let url = value.as_str()?;
                Some((label, url.to_owned()))
            })
            .collect())
    }
}

impl FromIterator<(EvidenceLabel, String)> for EvidenceMap {
    fn from_iter<I: IntoIterator<Item = (EvidenceLabel, String)>>(iter: I) -> Self {
        Self {
            urls: iter.into_iter().collect(),
        }
    }
}

impl Extend<(EvidenceLabel, String)> for EvidenceMap {
    fn extend<I: IntoIterator<Item = (EvidenceLabel, String)>>(&mut self, iter: I) {
        self.urls.extend(iter);
    }
}

/// Checkbox glyph applied to every rendered evidence item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckboxState {
    /// Rendered as `[x]`.
    #[default]
    Checked,
    /// Rendered as `[ ]`.
    Unchecked,
}

impl CheckboxState {
    /// Markdown task-list glyph for this state.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Checked => "[x]",
            Self::Unchecked => "[ ]",
        }
    }
}

/// Error returned when a checkbox state string is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("checkbox state must be `checked` or `unchecked`, got `{0}`")]
pub struct ParseCheckboxError(String);

impl FromStr for CheckboxState {
    type Err = ParseCheckboxError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "checked" => Ok(Self::Checked),
            "unchecked" => Ok(Self::Unchecked),
            _ => Err(ParseCheckboxError(value.to_owned())),
        }
    }
}

impl fmt::Display for CheckboxState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Checked => "checked",
            Self::Unchecked => "unchecked",
        })
    }
}
