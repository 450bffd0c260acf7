//! Config loading and validation.

use super::model::Config;
use crate::error::{Result, XpMatchError};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(XpMatchError::ConfigError)` - Read or parse error, or
    ///   validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            XpMatchError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string. Unknown keys are ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| XpMatchError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `field_separators` must name at least one character
    /// - `delimiter` must be non-empty
    /// - `stdin_label` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.field_separators.is_empty() {
            return Err(XpMatchError::ConfigError(
                "field_separators must not be empty".to_string(),
            ));
        }

        if self.delimiter.is_empty() {
            return Err(XpMatchError::ConfigError(
                "delimiter must not be empty".to_string(),
            ));
        }

        if self.stdin_label.is_empty() {
            return Err(XpMatchError::ConfigError(
                "stdin_label must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
