use canonical::{CanonicalError, NormalizeConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest edit distance a fuzzy match may tolerate.
pub const MAX_EDIT_DISTANCE: usize = 1;

/// Which step of the decision sequence accepted a query/text pair.
///
/// Steps are tried in declaration order; the first that holds wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchKind {
    /// Both sides fold to the same string.
    Exact,
    /// The folded text contains the folded query.
    QueryInText,
    /// The folded query contains the folded text (a stored value shorter
    /// than what the user typed).
    TextInQuery,
    /// The folded strings are within the configured edit distance.
    WithinDistance { distance: usize },
}

impl MatchKind {
    /// Stable label used in search trace events.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::QueryInText => "query_in_text",
            MatchKind::TextInQuery => "text_in_query",
            MatchKind::WithinDistance { .. } => "within_distance",
        }
    }
}

/// Configuration for fuzzy matching.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Version of the matching rules. Must be >= 1.
    #[serde(default = "MatchConfig::default_version")]
    pub version: u32,
    /// Largest tolerated edit distance between the folded strings.
    /// Only 0 (typos not tolerated) and 1 are supported.
    #[serde(default = "MatchConfig::default_max_edit_distance")]
    pub max_edit_distance: usize,
    /// Whether substring containment (either direction) counts as a match.
    #[serde(default = "MatchConfig::default_substring_checks")]
    pub substring_checks: bool,
    /// Folding applied to both sides before comparison.
    #[serde(default)]
    pub normalize: NormalizeConfig,
}

impl MatchConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_max_edit_distance() -> usize {
        MAX_EDIT_DISTANCE
    }

    pub(crate) fn default_substring_checks() -> bool {
        true
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "version must be >= 1".into(),
            ));
        }
        if self.max_edit_distance > MAX_EDIT_DISTANCE {
            return Err(MatchError::InvalidConfig(format!(
                "max_edit_distance must be <= {MAX_EDIT_DISTANCE}, got {}",
                self.max_edit_distance
            )));
        }
        self.normalize.validate()?;
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            max_edit_distance: Self::default_max_edit_distance(),
            substring_checks: Self::default_substring_checks(),
            normalize: NormalizeConfig::default(),
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid match configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// The nested normalize configuration was rejected.
    #[error("canonical error: {0}")]
    Canonical(#[from] CanonicalError),
}
