//! Error types for the converter
//!
//! The layout engine itself cannot fail. These errors cover the layers around
//! it: reading input and config files, loading the CSS grammar, and running
//! the optional reformatter.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion operations
#[derive(Error, Debug)]
pub enum ConverterError {
    /// IO errors (reading stylesheets or config files)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file parsing errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Tree-sitter language setup errors
    #[error("Failed to set up tree-sitter language: {message}")]
    TreeSitterLanguage { message: String },

    /// The parser produced no syntax tree
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Reformatting the rendered output failed
    #[error("Format error: {message}")]
    Format { message: String },

    /// Input file could not be found
    #[error("Input file not found: {path:?}")]
    InputNotFound { path: PathBuf },
}

/// Result type alias for conversion operations
pub type ConverterResult<T> = Result<T, ConverterError>;

impl From<std::io::Error> for ConverterError {
    fn from(err: std::io::Error) -> Self {
        ConverterError::Io {
            source: err,
            message: "IO operation failed".to_string(),
        }
    }
}

impl From<serde_json::Error> for ConverterError {
    fn from(err: serde_json::Error) -> Self {
        ConverterError::Json {
            source: err,
            message: "JSON operation failed".to_string(),
        }
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> ConverterResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> ConverterResult<T> {
        self.map_err(|e| ConverterError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Helper trait for converting JSON errors with context
pub trait JsonContext<T> {
    fn with_json_context(self, message: &str) -> ConverterResult<T>;
}

impl<T> JsonContext<T> for Result<T, serde_json::Error> {
    fn with_json_context(self, message: &str) -> ConverterResult<T> {
        self.map_err(|e| ConverterError::Json {
            message: message.to_string(),
            source: e,
        })
    }
}
