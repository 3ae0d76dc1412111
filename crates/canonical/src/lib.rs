//! Namefold canonical text layer.
//!
//! This crate folds short strings (names, roll numbers, identifiers) into a
//! comparison-friendly form. The matcher relies on it so that "José", "JOSE"
//! and "jose" all compare equal.
//!
//! ## What we do
//!
//! - Locale-independent Unicode lowercasing
//! - NFD canonical decomposition
//! - Removal of the Combining Diacritical Marks block (U+0300..=U+036F)
//!
//! Whitespace and punctuation are left alone.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same text and config give
//! the same result on any machine.
//!
//! ## Invariants worth knowing
//!
//! - `normalize` never fails; empty input yields `""`
//! - `normalize(normalize(s)) == normalize(s)`
//! - Output depends only on text + config

mod config;
mod error;
mod normalize;

pub use crate::config::NormalizeConfig;
pub use crate::error::CanonicalError;
pub use crate::normalize::{is_stripped_mark, normalize, normalize_option, normalize_with};
