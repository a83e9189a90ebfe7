//! Converter Constants
//!
//! Shared names for the layout engine and tree-sitter node kinds consumed by
//! the tokenizer. Keeping them in one place avoids typos across the passes.

/// Media type used for declarations without an explicit `@media` scope
pub const MEDIA_ALL: &str = "all";

/// One level of output indentation
pub const INDENT: &str = "\t";

/// Properties whose values are pulled out into variables, in category order
pub const VARIABLE_PROPERTIES: [&str; 9] = [
    "color",
    "font-family",
    "background-color",
    "border-color",
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
    "outline-color",
];

/// Combinator characters that get a `&` attach marker
pub const ATTACH_COMBINATORS: [char; 2] = ['+', '~'];

// Tree-sitter node kinds

/// Root node of the CSS syntax tree
pub const NODE_STYLESHEET: &str = "stylesheet";
/// A CSS rule containing selectors and a declaration block
pub const NODE_RULE_SET: &str = "rule_set";
/// Container for one or more selectors
pub const NODE_SELECTORS: &str = "selectors";
/// A block of declarations enclosed in curly braces
pub const NODE_BLOCK: &str = "block";
/// A single property-value pair
pub const NODE_DECLARATION: &str = "declaration";
/// CSS property name
pub const NODE_PROPERTY_NAME: &str = "property_name";
/// The `!important` flag of a declaration
pub const NODE_IMPORTANT: &str = "important";
/// CSS comment block
pub const NODE_COMMENT: &str = "comment";
/// `@media` statement
pub const NODE_MEDIA_STATEMENT: &str = "media_statement";
/// `@charset` statement
pub const NODE_CHARSET_STATEMENT: &str = "charset_statement";
/// `@keyframes` statement
pub const NODE_KEYFRAMES_STATEMENT: &str = "keyframes_statement";
/// Name of a keyframes animation
pub const NODE_KEYFRAMES_NAME: &str = "keyframes_name";
/// Braced list of keyframe blocks
pub const NODE_KEYFRAME_BLOCK_LIST: &str = "keyframe_block_list";
/// A single keyframe (`from`, `to` or a percentage) with its block
pub const NODE_KEYFRAME_BLOCK: &str = "keyframe_block";
/// Generic at-rule such as `@font-face`
pub const NODE_AT_RULE: &str = "at_rule";
/// Keyword of a generic at-rule (e.g. `@font-face`)
pub const NODE_AT_KEYWORD: &str = "at_keyword";
/// Tree-sitter error node for syntax errors
pub const NODE_ERROR: &str = "ERROR";

/// The literal `@font-face` keyword
pub const KEYWORD_AT_FONT_FACE: &str = "@font-face";

/// Colon separator between property and value
pub const NODE_COLON: &str = ":";
/// Semicolon terminator for declarations
pub const NODE_SEMICOLON: &str = ";";
/// Opening brace of a block
pub const NODE_OPEN_BRACE: &str = "{";
/// Closing brace of a block
pub const NODE_CLOSE_BRACE: &str = "}";
