//! CSS to LESS/SCSS converter
//!
//! Re-authors flat CSS as a nested stylesheet:
//! - tree-sitter-css for parsing the input into a flat token stream
//! - a layout engine that groups rules, nests selectors and extracts
//!   color/font variables
//! - malva for optional reformatting of the result

pub mod config;
pub mod constants;
pub mod dialect;
pub mod error;
pub mod formatter;
pub mod layouter;
pub mod ordered_map;
pub mod parser;
pub mod pretty;
pub mod renderer;
pub mod rules;
pub mod selector;
pub mod token;
pub mod tokenizer;
pub mod tree;
pub mod variables;

use config::ConverterConfig;
use error::ConverterResult;
use layouter::Layouter;
use pretty::Reformatter;
use token::Token;

/// Convert CSS source text using `config`
pub fn convert(css: &str, config: &ConverterConfig) -> ConverterResult<String> {
    let tokens = tokenizer::tokenize(css)?;
    let output = convert_tokens(&tokens, config);

    if config.reformat {
        return Reformatter::new().reformat(&output, config.dialect);
    }
    Ok(output)
}

/// Lay out an already tokenized stylesheet. Never fails.
pub fn convert_tokens(tokens: &[Token], config: &ConverterConfig) -> String {
    Layouter::from_config(config).layout(tokens)
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
