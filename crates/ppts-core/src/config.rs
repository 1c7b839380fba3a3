//! Load configuration read from an optional YAML file
//!
//! Configuration only touches plumbing (CSV dialect, destination handling,
//! the construct-cost fill). The transformation rules themselves are fixed
//! to the source schema and cannot be configured.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options for a single extract-to-database load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadConfig {
    /// CSV field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Replace an existing destination database instead of refusing
    #[serde(default)]
    pub overwrite: bool,

    /// Write missing construct costs as zero
    #[serde(default = "default_true")]
    pub fill_construct_cost: bool,
}

fn default_delimiter() -> char {
    ','
}

fn default_true() -> bool {
    true
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            overwrite: false,
            fill_construct_cost: true,
        }
    }
}

impl LoadConfig {
    /// Load configuration from a YAML file and validate it
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text and validate it
    pub fn from_yaml(content: &str) -> CoreResult<Self> {
        let config: LoadConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> CoreResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The delimiter as the single byte the CSV reader expects
    pub fn delimiter_byte(&self) -> CoreResult<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(|b| b.is_ascii())
            .ok_or_else(|| CoreError::ConfigInvalid {
                message: format!("delimiter '{}' must be a single ASCII character", self.delimiter),
            })
    }

    fn validate(&self) -> CoreResult<()> {
        let delimiter = self.delimiter_byte()?;
        if delimiter == b'"' || delimiter == b'\n' || delimiter == b'\r' {
            return Err(CoreError::ConfigInvalid {
                message: format!("delimiter {:?} conflicts with CSV quoting", self.delimiter),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
