//! Workspace umbrella crate for Namefold.
//!
//! Namefold makes interactive search over short text fields (student names,
//! roll numbers) tolerant of case, accents, partial input, and a single
//! typo. The work happens in two layers, re-exported here:
//!
//! - [`canonical`]: [`normalize`] folds text to lowercase and strips
//!   combining diacritical marks.
//! - [`matcher`]: [`fuzzy_match`] compares one query against one text.
//!
//! On top of those this crate adds the caller-side pieces: [`search`] over
//! an in-memory collection (with tracing and an optional [`SearchMetrics`]
//! observer), YAML configuration via [`NamefoldConfig`], and the built-in
//! [`run_self_checks`] suite.
//!
//! ```rust
//! use namefold::{fuzzy_match, normalize};
//!
//! assert_eq!(normalize("José"), "jose");
//! assert!(fuzzy_match("rvi", "ravi"));
//! assert!(!fuzzy_match("ana", "arun"));
//! ```

pub mod config;
mod metrics;
mod search;
mod selfcheck;

pub use canonical::{
    CanonicalError, NormalizeConfig, is_stripped_mark, normalize, normalize_option,
    normalize_with,
};
pub use matcher::{
    MAX_EDIT_DISTANCE, MatchConfig, MatchError, MatchKind, classify, classify_with,
    edit_distance, fuzzy_match, fuzzy_match_option,
};

pub use crate::config::{ConfigLoadError, NamefoldConfig};
pub use crate::metrics::{SearchMetrics, set_search_metrics};
pub use crate::search::{search, search_with};
pub use crate::selfcheck::{SelfCheck, all_passed, run_self_checks};
