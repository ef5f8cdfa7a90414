//! Validator configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file is a
//! valid configuration.

use crate::messages::Vocab;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default upper bound on the memory name, in characters
pub const DEFAULT_NAME_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Maximum length of the memory name (default: 64)
    #[serde(default = "default_name_max_length")]
    pub name_max_length: usize,
    /// Reserved names added on top of the built-in channel variables
    #[serde(default)]
    pub channel_variable_names: Vec<String>,
    /// Reserved names added on top of the built-in system variables
    #[serde(default)]
    pub system_variable_names: Vec<String>,
    /// Localized issue messages
    #[serde(default)]
    pub messages: Vocab,
}

fn default_name_max_length() -> usize {
    DEFAULT_NAME_MAX_LENGTH
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
            channel_variable_names: Vec::new(),
            system_variable_names: Vec::new(),
            messages: Vocab::default(),
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use memory_validator::config::ValidatorConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = ValidatorConfig::from_str(r#"
    ///     name_max_length = 40
    ///     system_variable_names = ["tenantId"]
    ///
    ///     [messages]
    ///     errorDuplicateKey = "Key already used"
    /// "#)?;
    /// assert_eq!(config.name_max_length, 40);
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}
