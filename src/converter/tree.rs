//! Nested style tree
//!
//! Folds rules into a tree keyed by media type, then by selector path
//! segment. Each node keeps the formatted declarations attached at its exact
//! path. Everything is insertion ordered since that order is the output order.

use crate::converter::constants::MEDIA_ALL;
use crate::converter::formatter::format_token;
use crate::converter::ordered_map::OrderedMap;
use crate::converter::rules::RuleList;
use crate::converter::selector::normalize_selector;
use crate::converter::token::Token;

/// One entry of a selector node, in output order
#[derive(Debug, Clone, PartialEq)]
pub enum NodeEntry<'a> {
    /// Formatted declarations attached at this node
    Rules(&'a [String]),
    /// Nested selector block
    Child(&'a str, &'a SelectorNode),
}

/// A node in the selector path tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorNode {
    children: OrderedMap<String, SelectorNode>,
    rules: Vec<String>,
    /// Number of children that existed when the first rule was attached.
    /// The rules render right before the child at this index.
    rules_position: Option<usize>,
}

impl SelectorNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the child for `segment`, creating it if needed
    pub fn child_or_insert(&mut self, segment: &str) -> &mut SelectorNode {
        self.children
            .get_or_insert_with(segment.to_string(), SelectorNode::new)
    }

    pub fn child(&self, segment: &str) -> Option<&SelectorNode> {
        self.children.get(&segment.to_string())
    }

    /// Follow `path` from this node
    pub fn descend(&self, path: &[&str]) -> Option<&SelectorNode> {
        path.iter()
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Attach a formatted declaration to this node
    pub fn push_rule(&mut self, rule: String) {
        if self.rules_position.is_none() {
            self.rules_position = Some(self.children.len());
        }
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    pub fn child_keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(|k| k.as_str())
    }

    /// Entries in insertion order, with the declaration list placed where it
    /// was first created among the children
    pub fn entries(&self) -> Vec<NodeEntry<'_>> {
        let mut entries = Vec::with_capacity(self.children.len() + 1);
        for (index, (segment, child)) in self.children.iter().enumerate() {
            if self.rules_position == Some(index) {
                entries.push(NodeEntry::Rules(&self.rules));
            }
            entries.push(NodeEntry::Child(segment.as_str(), child));
        }
        if self.rules_position == Some(self.children.len()) {
            entries.push(NodeEntry::Rules(&self.rules));
        }
        entries
    }
}

/// Selector trees grouped by media type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTree {
    media: OrderedMap<String, SelectorNode>,
}

impl StyleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root node for a media type
    pub fn media(&self, media_type: &str) -> Option<&SelectorNode> {
        self.media.get(&media_type.to_string())
    }

    pub fn media_types(&self) -> impl Iterator<Item = &str> {
        self.media.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SelectorNode)> {
        self.media.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Attach `rule` under `media_type` at the normalized path of `selector`
    pub fn attach(&mut self, media_type: &str, selector: &str, rule: String) {
        let mut node = self
            .media
            .get_or_insert_with(media_type.to_string(), SelectorNode::new);
        for segment in normalize_selector(selector) {
            node = node.child_or_insert(&segment);
        }
        node.push_rule(rule);
    }
}

/// Build the nested tree for all rules.
///
/// Declarations without media types belong to `all`. A media type listed more
/// than once on a declaration is attached once. Comments are skipped.
pub fn build_tree(rules: &RuleList) -> StyleTree {
    let mut tree = StyleTree::new();

    for rule in rules.rules() {
        for token in &rule.declarations {
            let media_types: Vec<&str> = match token {
                Token::Comment { .. } => continue,
                Token::Declaration { media_types, .. } if !media_types.is_empty() => {
                    let mut unique: Vec<&str> = Vec::with_capacity(media_types.len());
                    for media_type in media_types {
                        if !unique.contains(&media_type.as_str()) {
                            unique.push(media_type.as_str());
                        }
                    }
                    unique
                }
                _ => vec![MEDIA_ALL],
            };

            let formatted = format_token(token, 0);
            for media_type in &media_types {
                for selector in &rule.selectors {
                    tree.attach(media_type, selector, formatted.clone());
                }
            }
        }
    }

    tree
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
