//! Parsing of the comma-separated button title string.

use crate::error::ControlError;
use std::fmt;
use std::str::FromStr;

/// The ordered, non-empty list of segment labels.
///
/// Built by splitting a string on `,`. Parts are kept exactly as written:
/// no trimming, no deduplication, and empty parts become empty labels. So
/// `"Red, Green"` yields `"Red"` and `" Green"` (with the leading space),
/// and `","` yields two empty labels. Only the empty string is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Titles {
    source: String,
    labels: Vec<String>,
}

impl Titles {
    /// Split `source` on commas.
    pub fn parse(source: &str) -> Result<Self, ControlError> {
        if source.is_empty() {
            return Err(ControlError::EmptyTitles);
        }
        Ok(Self {
            source: source.to_string(),
            labels: source.split(',').map(str::to_string).collect(),
        })
    }

    /// The labels, left to right.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of segments. Always at least one.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The string these titles were parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Titles {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Titles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
