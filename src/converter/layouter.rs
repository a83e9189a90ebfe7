//! Layouter
//!
//! Runs the layout passes over one token stream: variable extraction, rule
//! extraction, tree building and rendering.

use crate::converter::config::ConverterConfig;
use crate::converter::dialect::Dialect;
use crate::converter::renderer::render;
use crate::converter::rules::extract_rules;
use crate::converter::token::Token;
use crate::converter::tree::build_tree;
use crate::converter::variables::extract_variables;

/// Lays out a flat token stream as a nested stylesheet
#[derive(Debug, Clone, Copy)]
pub struct Layouter {
    dialect: Dialect,
    extract_variables: bool,
}

impl Layouter {
    pub fn new(dialect: Dialect, extract_variables: bool) -> Self {
        Self {
            dialect,
            extract_variables,
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.dialect, config.extract_variables)
    }

    /// Convert `tokens` into nested-block text. Never fails; malformed
    /// nesting in the stream degrades silently.
    pub fn layout(&self, tokens: &[Token]) -> String {
        let (tokens, variables) = if self.extract_variables {
            let (rewritten, table) = extract_variables(tokens, self.dialect);
            (rewritten, Some(table))
        } else {
            (tokens.to_vec(), None)
        };

        let extracted = extract_rules(tokens);
        let tree = build_tree(&extracted.rules);

        log::debug!(
            "Laying out {} top-level tokens and {} rules across {} media types",
            extracted.top_level.len(),
            extracted.rules.len(),
            tree.media_types().count()
        );

        render(&extracted.top_level, &tree, variables.as_ref(), self.dialect)
    }
}

impl Default for Layouter {
    fn default() -> Self {
        Self::from_config(&ConverterConfig::default())
    }
}
