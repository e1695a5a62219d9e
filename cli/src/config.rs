//! YAML configuration for the `flag-syntax` command.
//!
//! ```yaml
//! version: "1.0"
//! output:
//!   format: tree
//! diagnostics:
//!   show_source: false
//! ```
//!
//! Every section is optional; missing values fall back to [`CliConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::output::OutputFormat;

/// Config format versions this build understands.
const SUPPORTED_VERSIONS: &[&str] = &["1", "1.0"];

/// Errors raised while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid YAML for [`CliConfig`].
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The `version` field names an unknown format.
    #[error("unsupported config version '{0}'")]
    UnsupportedVersion(String),
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default format for `parse` when `--format` is not given.
    pub format: OutputFormat,
}

/// Diagnostic settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Echo the definition with a caret under the offending character.
    pub show_source: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { show_source: true }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Configuration format version.
    pub version: String,
    /// Output settings.
    pub output: OutputConfig,
    /// Diagnostic settings.
    pub diagnostics: DiagnosticsConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            output: OutputConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if parsing fails, or
    /// [`ConfigError::UnsupportedVersion`] for an unknown `version`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Same as [`CliConfig::load`], minus I/O.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check_version()?;
        Ok(config)
    }

    fn check_version(&self) -> Result<(), ConfigError> {
        if SUPPORTED_VERSIONS.contains(&self.version.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::UnsupportedVersion(self.version.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = CliConfig::from_yaml(
            r#"
version: "1.0"
output:
  format: tree
diagnostics:
  show_source: false
"#,
        )
        .unwrap();
        assert_eq!(config.output.format, OutputFormat::Tree);
        assert!(!config.diagnostics.show_source);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = CliConfig::from_yaml("output:\n  format: yaml\n").unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.output.format, OutputFormat::Yaml);
        assert!(config.diagnostics.show_source);
    }

    #[test]
    fn test_default_format_is_json() {
        assert_eq!(CliConfig::default().output.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_version_rejected() {
        let err = CliConfig::from_yaml("version: \"2.0\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion(v) if v == "2.0"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = CliConfig::from_yaml("output:\n  format: xml\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
