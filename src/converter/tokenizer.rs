//! CSS tokenizer
//!
//! Walks a tree-sitter-css syntax tree and flattens it into the token stream
//! the layout engine consumes. Declarations inside `@media` blocks carry the
//! block's queries as their media types; the last declaration of every block
//! is flagged so it renders without a trailing semicolon.
//!
//! The tokenizer does not validate CSS: syntax error nodes are skipped with a
//! warning and unknown at-rules are passed through verbatim. An at-rule the
//! grammar cannot read (such as `@keyframes "name"`) is kept verbatim too,
//! instead of letting its body turn into a ruleset.

use tree_sitter::Node;

use crate::converter::constants::*;
use crate::converter::error::ConverterResult;
use crate::converter::parser::CssParser;
use crate::converter::token::{Declaration, Token};

/// Tokenize CSS source text
pub fn tokenize(css: &str) -> ConverterResult<Vec<Token>> {
    let mut parser = CssParser::new()?;
    let tree = parser.parse(css)?;
    let root = tree.root_node();

    if root.has_error() {
        log::warn!("Stylesheet contains syntax errors, affected parts are skipped");
    }

    let mut tokenizer = Tokenizer::new(css);
    tokenizer.visit_items(children(root), &[]);

    log::debug!("Tokenized stylesheet into {} tokens", tokenizer.tokens.len());
    Ok(tokenizer.tokens)
}

/// Collapse whitespace runs outside quotes to a single space and trim
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut quote: Option<char> = None;
    let mut pending_space = false;

    for c in text.trim().chars() {
        if quote.is_none() && c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        match quote {
            Some(open) if c == open => quote = None,
            None if c == '"' || c == '\'' => quote = Some(c),
            _ => {}
        }
        out.push(c);
    }

    out
}

fn children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

fn find_child<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    children(node).into_iter().find(|child| child.kind() == kind)
}

fn push_unique(items: &mut Vec<String>, item: String) {
    if !items.contains(&item) {
        items.push(item);
    }
}

struct Tokenizer<'s> {
    source: &'s str,
    tokens: Vec<Token>,
}

impl<'s> Tokenizer<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
        }
    }

    fn text(&self, node: Node) -> &'s str {
        &self.source[node.start_byte()..node.end_byte()]
    }

    /// Handle the items of the stylesheet or of an `@media` block
    fn visit_items(&mut self, nodes: Vec<Node>, media_types: &[String]) {
        let mut iter = nodes.into_iter().peekable();
        while let Some(node) = iter.next() {
            let broken_at_rule =
                node.kind() == NODE_ERROR && self.text(node).trim_start().starts_with('@');
            match iter.peek() {
                Some(next) if broken_at_rule && next.kind() == NODE_RULE_SET => {
                    let text = self.source[node.start_byte()..next.end_byte()].trim();
                    log::warn!("Keeping unparsable at-rule verbatim: {}", text);
                    self.tokens.push(Token::Raw {
                        text: text.to_string(),
                    });
                    iter.next();
                }
                _ => self.visit_item(node, media_types),
            }
        }
    }

    /// Handle a top-level item or an item inside an `@media` block
    fn visit_item(&mut self, node: Node, media_types: &[String]) {
        match node.kind() {
            NODE_RULE_SET => self.visit_rule_set(node, media_types),
            NODE_MEDIA_STATEMENT => self.visit_media(node, media_types),
            NODE_CHARSET_STATEMENT => self.visit_charset(node),
            NODE_KEYFRAMES_STATEMENT => self.visit_keyframes(node),
            NODE_AT_RULE => self.visit_at_rule(node),
            NODE_COMMENT => self.tokens.push(Token::Comment {
                text: self.text(node).to_string(),
            }),
            NODE_ERROR => {
                let position = node.start_position();
                log::warn!(
                    "Skipping unparsable CSS at line {}, column {}",
                    position.row + 1,
                    position.column + 1
                );
            }
            _ if node.is_named() => self.tokens.push(Token::Raw {
                text: self.text(node).trim().to_string(),
            }),
            _ => {}
        }
    }

    fn visit_rule_set(&mut self, node: Node, media_types: &[String]) {
        let text = self.text(node).trim();
        if text.starts_with('@') {
            log::warn!("Keeping unparsable at-rule verbatim: {}", text);
            self.tokens.push(Token::Raw {
                text: text.to_string(),
            });
            return;
        }

        let (Some(selectors), Some(block)) =
            (find_child(node, NODE_SELECTORS), find_child(node, NODE_BLOCK))
        else {
            log::warn!("Skipping ruleset without selectors or block: {}", self.text(node));
            return;
        };

        let selectors: Vec<String> = children(selectors)
            .into_iter()
            .filter(|child| child.is_named() && child.kind() != NODE_COMMENT)
            .map(|child| collapse_whitespace(self.text(child)))
            .collect();

        self.tokens.push(Token::RulesetStart { selectors });
        self.visit_block(block, |declaration| Token::Declaration {
            declaration,
            media_types: media_types.to_vec(),
        });
        self.tokens.push(Token::RulesetEnd);
    }

    /// Emit an `@media` block. Repeated queries are dropped, and inside an
    /// enclosing `@media` every query is combined with the outer ones as
    /// `outer and inner`.
    fn visit_media(&mut self, node: Node, outer: &[String]) {
        let mut queries: Vec<String> = Vec::new();
        for child in children(node) {
            if !child.is_named() || matches!(child.kind(), NODE_BLOCK | NODE_COMMENT) {
                continue;
            }
            let query = collapse_whitespace(self.text(child));
            if outer.is_empty() {
                push_unique(&mut queries, query);
            } else {
                for scope in outer {
                    push_unique(&mut queries, format!("{} and {}", scope, query));
                }
            }
        }

        self.tokens.push(Token::AtMediaStart {
            media_types: queries.clone(),
        });
        if let Some(block) = find_child(node, NODE_BLOCK) {
            self.visit_items(children(block), &queries);
        }
        self.tokens.push(Token::AtMediaEnd);
    }

    fn visit_charset(&mut self, node: Node) {
        let value = children(node)
            .into_iter()
            .find(|child| child.is_named() && child.kind() != NODE_COMMENT);
        match value {
            Some(value) => self.tokens.push(Token::AtCharset {
                charset: self.text(value).to_string(),
            }),
            None => log::warn!("Skipping @charset without a value"),
        }
    }

    fn visit_keyframes(&mut self, node: Node) {
        let nodes = children(node);
        let at_rule_name = nodes
            .first()
            .map(|keyword| self.text(*keyword).trim_start_matches('@').to_string())
            .unwrap_or_else(|| "keyframes".to_string());
        let name = nodes
            .iter()
            .find(|child| child.kind() == NODE_KEYFRAMES_NAME)
            .map(|child| self.text(*child).to_string())
            .unwrap_or_default();

        self.tokens.push(Token::AtKeyframesStart { at_rule_name, name });

        if let Some(list) = find_child(node, NODE_KEYFRAME_BLOCK_LIST) {
            for keyframe in children(list) {
                match keyframe.kind() {
                    NODE_KEYFRAME_BLOCK => self.visit_keyframe_block(keyframe),
                    NODE_COMMENT => self.tokens.push(Token::Comment {
                        text: self.text(keyframe).to_string(),
                    }),
                    _ => {}
                }
            }
        }

        self.tokens.push(Token::AtKeyframesEnd);
    }

    fn visit_keyframe_block(&mut self, node: Node) {
        let selectors: Vec<String> = children(node)
            .into_iter()
            .filter(|child| child.is_named() && !matches!(child.kind(), NODE_BLOCK | NODE_COMMENT))
            .map(|child| collapse_whitespace(self.text(child)))
            .collect();

        self.tokens.push(Token::AtKeyframesRulesetStart { selectors });
        if let Some(block) = find_child(node, NODE_BLOCK) {
            self.visit_block(block, Token::AtKeyframesRulesetDeclaration);
        }
        self.tokens.push(Token::AtKeyframesRulesetEnd);
    }

    fn visit_at_rule(&mut self, node: Node) {
        let keyword = find_child(node, NODE_AT_KEYWORD).map(|keyword| self.text(keyword));
        let block = find_child(node, NODE_BLOCK);

        match (keyword, block) {
            (Some(KEYWORD_AT_FONT_FACE), Some(block)) => {
                self.tokens.push(Token::AtFontFaceStart);
                self.visit_block(block, Token::AtFontFaceDeclaration);
                self.tokens.push(Token::AtFontFaceEnd);
            }
            _ => self.tokens.push(Token::Raw {
                text: self.text(node).trim().to_string(),
            }),
        }
    }

    /// Emit the declarations and comments of a block. Anything else nested in
    /// the block is kept verbatim.
    fn visit_block<F>(&mut self, block: Node, make_token: F)
    where
        F: Fn(Declaration) -> Token,
    {
        let items = children(block);
        let last_declaration = items
            .iter()
            .filter(|child| child.kind() == NODE_DECLARATION)
            .last()
            .map(|child| child.id());

        for item in items {
            match item.kind() {
                NODE_DECLARATION => {
                    if let Some(mut declaration) = self.parse_declaration(item) {
                        declaration.is_last = Some(item.id()) == last_declaration;
                        self.tokens.push(make_token(declaration));
                    }
                }
                NODE_COMMENT => self.tokens.push(Token::Comment {
                    text: self.text(item).to_string(),
                }),
                NODE_OPEN_BRACE | NODE_CLOSE_BRACE => {}
                NODE_ERROR => {
                    log::warn!("Skipping unparsable declaration: {}", self.text(item).trim());
                }
                _ if item.is_named() => {
                    log::warn!("Nested '{}' inside a block is kept verbatim", item.kind());
                    self.tokens.push(Token::Raw {
                        text: self.text(item).trim().to_string(),
                    });
                }
                _ => {}
            }
        }
    }

    fn parse_declaration(&self, node: Node) -> Option<Declaration> {
        let mut property = None;
        let mut seen_colon = false;
        let mut is_important = false;
        let mut value_range: Option<(usize, usize)> = None;

        for child in children(node) {
            match child.kind() {
                NODE_PROPERTY_NAME if !seen_colon => property = Some(self.text(child)),
                NODE_COLON if !seen_colon => seen_colon = true,
                NODE_IMPORTANT => is_important = true,
                NODE_SEMICOLON | NODE_COMMENT => {}
                _ if seen_colon && !is_important => {
                    let start = value_range.map_or(child.start_byte(), |(start, _)| start);
                    value_range = Some((start, child.end_byte()));
                }
                _ => {}
            }
        }

        let property = property?;
        let value = value_range
            .map(|(start, end)| collapse_whitespace(&self.source[start..end]))
            .unwrap_or_default();

        Some(Declaration {
            property: property.to_string(),
            value,
            is_important,
            is_last: false,
        })
    }
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
