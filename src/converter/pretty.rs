//! Optional reformatting of the rendered stylesheet with malva

use malva::{config::FormatOptions, format_text};

use crate::converter::dialect::Dialect;
use crate::converter::error::{ConverterError, ConverterResult};

/// Reformats rendered LESS/SCSS text
pub struct Reformatter {
    format_options: FormatOptions,
}

impl Reformatter {
    /// Create a reformatter with malva's default options
    pub fn new() -> Self {
        Self {
            format_options: FormatOptions::default(),
        }
    }

    /// Reformat `content` in the syntax of `dialect`
    pub fn reformat(&self, content: &str, dialect: Dialect) -> ConverterResult<String> {
        format_text(content, dialect.malva_syntax(), &self.format_options).map_err(|e| {
            log::warn!("Failed to reformat {} output: {}", dialect.extension(), e);
            ConverterError::Format {
                message: e.to_string(),
            }
        })
    }
}

impl Default for Reformatter {
    fn default() -> Self {
        Self::new()
    }
}
