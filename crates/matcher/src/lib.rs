//! # Namefold Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` decides whether a typed query and a stored value (a name, a roll
//! number) are "close enough" for interactive search. It tolerates case,
//! accents, partial input, and a single typo, and it works one pair at a
//! time: there is no index and no ranking. Callers that search a list loop
//! over it and call [`fuzzy_match`] per candidate.
//!
//! ## Decision sequence
//!
//! 1. Empty query or empty text: no match.
//! 2. Fold both sides with [`canonical::normalize`].
//! 3. Equal after folding: [`MatchKind::Exact`].
//! 4. Text contains query: [`MatchKind::QueryInText`].
//! 5. Query contains text: [`MatchKind::TextInQuery`].
//! 6. Edit distance <= 1: [`MatchKind::WithinDistance`].
//!
//! ## Core Types
//!
//! - [`MatchKind`]: which step accepted a pair.
//! - [`MatchConfig`]: tolerance, substring toggle, and folding rules for
//!   [`classify_with`].
//! - [`MatchError`]: returned only for invalid configs.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{classify, edit_distance, fuzzy_match, MatchKind};
//!
//! assert!(fuzzy_match("rvi", "ravi"));
//! assert_eq!(classify("jose", "José"), Some(MatchKind::Exact));
//! assert_eq!(edit_distance("ana", "arun"), 3);
//! ```

mod distance;
mod engine;
mod types;

pub use crate::distance::edit_distance;
pub use crate::engine::{classify, classify_with, fuzzy_match, fuzzy_match_option};
pub use crate::types::{MatchConfig, MatchError, MatchKind, MAX_EDIT_DISTANCE};
