//! CSS Converter Library
//!
//! Converts flat CSS into nested LESS or SCSS stylesheets, nesting selectors
//! and extracting color and font values into variables.

pub mod converter;
pub mod logging;
#[cfg(test)]
pub mod test_utils;

pub use converter::config::ConverterConfig;
pub use converter::dialect::Dialect;
pub use converter::error::{ConverterError, ConverterResult};
pub use converter::{convert, convert_tokens};
