//! YAML configuration file support for Namefold.
//!
//! Loads the normalizer and matcher settings from a single YAML file and
//! converts them into the runtime configs used by [`crate::search_with`]
//! and [`matcher::classify_with`].
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # Namefold configuration
//! version: "1.0"
//! name: "student search"
//!
//! normalize:
//!   version: 1
//!   lowercase: true
//!   strip_marks: true
//!
//! matcher:
//!   version: 1
//!   max_edit_distance: 1
//!   substring_checks: true
//! ```

use std::fs;
use std::path::Path;

use canonical::NormalizeConfig;
use matcher::{MAX_EDIT_DISTANCE, MatchConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NamefoldConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Folding rules
    #[serde(default)]
    pub normalize: NormalizeYamlConfig,

    /// Matching rules
    #[serde(default)]
    pub matcher: MatchYamlConfig,
}

impl NamefoldConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "config_load");
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: NamefoldConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.normalize.validate()?;
        self.matcher.validate()?;

        Ok(())
    }

    /// Runtime folding config.
    pub fn normalize_config(&self) -> NormalizeConfig {
        NormalizeConfig {
            version: self.normalize.version,
            lowercase: self.normalize.lowercase,
            strip_marks: self.normalize.strip_marks,
        }
    }

    /// Runtime matching config, with the folding rules embedded.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            version: self.matcher.version,
            max_edit_distance: self.matcher.max_edit_distance,
            substring_checks: self.matcher.substring_checks,
            normalize: self.normalize_config(),
        }
    }
}

impl Default for NamefoldConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            normalize: NormalizeYamlConfig::default(),
            matcher: MatchYamlConfig::default(),
        }
    }
}

/// Normalizer YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "true_value")]
    pub lowercase: bool,

    #[serde(default = "true_value")]
    pub strip_marks: bool,
}

impl NormalizeYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "normalize.version must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            lowercase: true,
            strip_marks: true,
        }
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: usize,

    #[serde(default = "true_value")]
    pub substring_checks: bool,
}

impl MatchYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "matcher.version must be >= 1".to_string(),
            ));
        }
        if self.max_edit_distance > MAX_EDIT_DISTANCE {
            return Err(ConfigLoadError::Validation(format!(
                "matcher.max_edit_distance must be <= {MAX_EDIT_DISTANCE}"
            )));
        }
        Ok(())
    }
}

impl Default for MatchYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            max_edit_distance: MAX_EDIT_DISTANCE,
            substring_checks: true,
        }
    }
}

// Helper functions for serde defaults
fn default_version() -> u32 {
    1
}
fn default_max_edit_distance() -> usize {
    MAX_EDIT_DISTANCE
}
fn true_value() -> bool {
    true
}
