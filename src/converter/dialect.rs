//! Output dialects
//!
//! LESS and SCSS share the nested block syntax the converter emits; they only
//! differ in how variables are declared and referenced.

use serde::{Deserialize, Serialize};

/// Target stylesheet dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Less,
    Scss,
}

impl Dialect {
    /// Prefix marking a variable name
    pub fn variable_sigil(self) -> char {
        match self {
            Dialect::Less => '@',
            Dialect::Scss => '$',
        }
    }

    /// Reference to a variable, e.g. `@color_1`
    pub fn variable_reference(self, name: &str) -> String {
        format!("{}{}", self.variable_sigil(), name)
    }

    /// Variable declaration line, e.g. `@color_1: red;`
    pub fn variable_declaration(self, name: &str, value: &str) -> String {
        format!("{}: {};", self.variable_reference(name), value)
    }

    /// Syntax for the malva reformatter
    pub fn malva_syntax(self) -> malva::Syntax {
        match self {
            Dialect::Less => malva::Syntax::Less,
            Dialect::Scss => malva::Syntax::Scss,
        }
    }

    /// Conventional file extension for the dialect
    pub fn extension(self) -> &'static str {
        match self {
            Dialect::Less => "less",
            Dialect::Scss => "scss",
        }
    }
}
