//! Configuration for text processors.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordsmithError};
use crate::validation::{MAX_PATTERN_LENGTH, MAX_SUBSTRING_LENGTH, MAX_TEXT_LENGTH};

/// Length limits applied by every processor.
///
/// All limits are measured in characters. Missing fields in a JSON file fall
/// back to their defaults.
///
/// # Examples
///
/// ```
/// use wordsmith::config::ProcessorConfig;
///
/// let config = ProcessorConfig::from_json_str(r#"{ "max_text_length": 50 }"#).unwrap();
/// assert_eq!(config.max_text_length, 50);
/// assert_eq!(config.max_substring_length, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Maximum length of a bound document text.
    pub max_text_length: usize,

    /// Maximum length of a search substring.
    pub max_substring_length: usize,

    /// Maximum length of a regex source.
    pub max_pattern_length: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            max_text_length: MAX_TEXT_LENGTH,
            max_substring_length: MAX_SUBSTRING_LENGTH,
            max_pattern_length: MAX_PATTERN_LENGTH,
        }
    }
}

impl ProcessorConfig {
    /// Create a configuration with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum document text length.
    pub fn with_max_text_length(mut self, max: usize) -> Self {
        self.max_text_length = max;
        self
    }

    /// Set the maximum search substring length.
    pub fn with_max_substring_length(mut self, max: usize) -> Self {
        self.max_substring_length = max;
        self
    }

    /// Set the maximum regex source length.
    pub fn with_max_pattern_length(mut self, max: usize) -> Self {
        self.max_pattern_length = max;
        self
    }

    /// Check that every limit is usable.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("max_text_length", self.max_text_length),
            ("max_substring_length", self.max_substring_length),
            ("max_pattern_length", self.max_pattern_length),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(WordsmithError::invalid_type(
                    name,
                    "an integer greater than 0",
                ));
            }
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ProcessorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading processor config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
