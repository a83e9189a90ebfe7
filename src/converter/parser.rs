//! CSS parser using tree-sitter-css

use tree_sitter::{Parser, Tree};

use crate::converter::error::{ConverterError, ConverterResult};

/// CSS parser wrapper around tree-sitter-css
pub struct CssParser {
    parser: Parser,
}

impl CssParser {
    /// Create a new CSS parser
    pub fn new() -> ConverterResult<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_css::LANGUAGE.into())
            .map_err(|e| ConverterError::TreeSitterLanguage {
                message: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse CSS content and return the syntax tree
    pub fn parse(&mut self, content: &str) -> ConverterResult<Tree> {
        self.parser
            .parse(content, None)
            .ok_or_else(|| ConverterError::Parse {
                message: "tree-sitter returned no syntax tree".to_string(),
            })
    }
}
