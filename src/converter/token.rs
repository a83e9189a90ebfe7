//! CSS Token Model
//!
//! The flat token stream the layout engine consumes. Each variant mirrors one
//! kind of token the tokenizer emits; declaration-bearing tokens carry the
//! media types they were declared under.

use std::fmt;

/// A property/value pair as found inside a ruleset, font-face or keyframe block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub is_important: bool,
    /// Last declaration of its block; rendered without a trailing `;`
    pub is_last: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            is_important: false,
            is_last: false,
        }
    }

    pub fn important(mut self) -> Self {
        self.is_important = true;
        self
    }

    pub fn last(mut self) -> Self {
        self.is_last = true;
        self
    }

    /// Render as `property: value[ !important][;]`
    pub fn body(&self) -> String {
        let mut out = format!("{}: {}", self.property, self.value);
        if self.is_important {
            out.push_str(" !important");
        }
        if !self.is_last {
            out.push(';');
        }
        out
    }
}

/// One token of the flat CSS stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opens a ruleset, e.g. `html, body {`
    RulesetStart { selectors: Vec<String> },
    RulesetEnd,
    /// Opens an `@media` block. Purely structural; media membership lives on declarations.
    AtMediaStart { media_types: Vec<String> },
    AtMediaEnd,
    /// Declaration inside a ruleset
    Declaration {
        declaration: Declaration,
        media_types: Vec<String>,
    },
    AtCharset { charset: String },
    AtFontFaceStart,
    AtFontFaceDeclaration(Declaration),
    AtFontFaceEnd,
    /// `@keyframes name {` (also vendor prefixed forms such as `@-webkit-keyframes`)
    AtKeyframesStart { at_rule_name: String, name: String },
    AtKeyframesRulesetStart { selectors: Vec<String> },
    AtKeyframesRulesetEnd,
    AtKeyframesRulesetDeclaration(Declaration),
    AtKeyframesEnd,
    /// Full comment text including the `/* */` delimiters
    Comment { text: String },
    /// Any at-rule the tokenizer does not model, kept verbatim
    Raw { text: String },
}

impl Token {
    /// Ruleset declaration without media scoping
    pub fn declaration(declaration: Declaration) -> Self {
        Token::Declaration {
            declaration,
            media_types: Vec::new(),
        }
    }

    /// Ruleset declaration scoped to the given media types
    pub fn scoped_declaration(declaration: Declaration, media_types: &[&str]) -> Self {
        Token::Declaration {
            declaration,
            media_types: media_types.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn ruleset_start(selectors: &[&str]) -> Self {
        Token::RulesetStart {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::RulesetStart { selectors } => write!(f, "{} {{", selectors.join(",")),
            Token::RulesetEnd
            | Token::AtMediaEnd
            | Token::AtFontFaceEnd
            | Token::AtKeyframesRulesetEnd
            | Token::AtKeyframesEnd => write!(f, "}}"),
            Token::AtMediaStart { media_types } => write!(f, "@media {} {{", media_types.join(", ")),
            Token::Declaration { declaration, .. }
            | Token::AtFontFaceDeclaration(declaration)
            | Token::AtKeyframesRulesetDeclaration(declaration) => {
                write!(f, "{}", declaration.body())
            }
            Token::AtCharset { charset } => write!(f, "@charset {};", charset),
            Token::AtFontFaceStart => write!(f, "@font-face {{"),
            Token::AtKeyframesStart { at_rule_name, name } => {
                write!(f, "@{} \"{}\" {{", at_rule_name, name)
            }
            Token::AtKeyframesRulesetStart { selectors } => write!(f, "{} {{", selectors.join(",")),
            Token::Comment { text } => write!(f, "{}", text),
            Token::Raw { text } => write!(f, "{}", text),
        }
    }
}
