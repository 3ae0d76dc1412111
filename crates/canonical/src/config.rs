//! Configuration types for name normalization.
//!
//! This module defines [`NormalizeConfig`], which controls which folding
//! steps [`normalize_with`](crate::normalize_with) applies.
//!
//! # Versioning
//!
//! The `version` field tracks folding behavior. Any change to what a given
//! configuration produces must come with a version bump, so stored
//! normalized keys can be told apart from keys produced by newer rules.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.lowercase);
//! assert!(config.strip_marks);
//! ```
//!
//! ## Keeping Diacritics
//!
//! ```rust
//! use canonical::{normalize_with, NormalizeConfig};
//!
//! let config = NormalizeConfig {
//!     strip_marks: false,
//!     ..Default::default()
//! };
//! assert_eq!(normalize_with("JOSÉ", &config).unwrap(), "josé");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the normalizer.
///
/// `NormalizeConfig` is cheap to clone and serializable so it can be embedded
/// in higher-level configuration files.
///
/// # Version Requirements
///
/// The `version` field must be >= 1. Version 0 is reserved and rejected with
/// [`CanonicalError::InvalidConfig`].
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "lowercase": true,
///   "strip_marks": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Version of the folding rules.
    ///
    /// Must be >= 1 (version 0 is reserved and rejected).
    pub version: u32,

    /// If true, apply locale-independent Unicode lowercasing.
    ///
    /// Rust's `str::to_lowercase` follows the Unicode default case mapping,
    /// so the result never depends on the host locale:
    ///
    /// ```text
    /// "JOSE"     → "jose"
    /// "İstanbul" → "i̇stanbul" (the dot becomes U+0307 and is then stripped)
    /// ```
    ///
    /// # Default
    ///
    /// `true`
    pub lowercase: bool,

    /// If true, decompose to NFD and drop combining diacritical marks.
    ///
    /// Only the Combining Diacritical Marks block (U+0300..=U+036F) is
    /// removed. Marks from other blocks (Hebrew points, Devanagari signs)
    /// are kept in their decomposed position.
    ///
    /// ```text
    /// "José" (U+00E9)          → "jose"
    /// "Jose" + U+0301          → "jose"
    /// "Ångström"               → "angstrom"
    /// ```
    ///
    /// # Default
    ///
    /// `true`
    pub strip_marks: bool,
}

impl NormalizeConfig {
    /// Checks the configuration before it is used.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    /// Creates the default `NormalizeConfig`.
    ///
    /// - `version`: 1
    /// - `lowercase`: true
    /// - `strip_marks`: true
    ///
    /// This is the configuration used by [`normalize`](crate::normalize).
    fn default() -> Self {
        Self {
            version: 1,
            lowercase: true,
            strip_marks: true,
        }
    }
}
