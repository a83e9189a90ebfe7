//! Converter configuration
//!
//! Options can come from a JSON file; any field left out falls back to its
//! default. Command line flags are applied on top by the binary.

use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::converter::dialect::Dialect;
use crate::converter::error::{ConverterError, ConverterResult, IoContext, JsonContext};

/// Options for one conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConverterConfig {
    /// Output dialect
    pub dialect: Dialect,
    /// Pull color and font-family values out into variables
    pub extract_variables: bool,
    /// Run the rendered output through malva
    pub reformat: bool,
    /// Log level for the command line tool (`off`, `error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Less,
            extract_variables: true,
            reformat: false,
            log_level: "warn".to_string(),
        }
    }
}

impl ConverterConfig {
    /// Parse a config from JSON text
    pub fn from_json_str(content: &str) -> ConverterResult<Self> {
        serde_json::from_str(content).with_json_context("Failed to parse converter config")
    }

    /// Load a config file
    pub fn load(path: &Path) -> ConverterResult<Self> {
        if !path.exists() {
            return Err(ConverterError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)
            .with_io_context(&format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&content)
    }

    /// Parsed log level, `Warn` when the name is not recognized
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::default();
        assert_eq!(config.dialect, Dialect::Less);
        assert!(config.extract_variables);
        assert!(!config.reformat);
        assert_eq!(config.level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ConverterConfig::from_json_str(r#"{ "dialect": "scss" }"#).unwrap();
        assert_eq!(config.dialect, Dialect::Scss);
        assert!(config.extract_variables);
    }

    #[test]
    fn test_full_json() {
        let config = ConverterConfig::from_json_str(
            r#"{ "dialect": "less", "extractVariables": false, "reformat": true, "logLevel": "debug" }"#,
        )
        .unwrap();
        assert!(!config.extract_variables);
        assert!(config.reformat);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let result = ConverterConfig::from_json_str("{ dialect: ");
        assert!(matches!(result, Err(ConverterError::Json { .. })));

        let result = ConverterConfig::from_json_str(r#"{ "dialect": "stylus" }"#);
        assert!(matches!(result, Err(ConverterError::Json { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "extractVariables": false }}"#).unwrap();

        let config = ConverterConfig::load(file.path()).unwrap();
        assert!(!config.extract_variables);
        assert_eq!(config.dialect, Dialect::Less);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConverterConfig::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(ConverterError::InputNotFound { .. })));
    }
}
