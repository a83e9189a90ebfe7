//! Nested-block renderer
//!
//! Serializes the variable block, the top-level tokens and the style tree
//! into LESS/SCSS text. Media types other than `all` are wrapped in an
//! `@media` block one level up.

use crate::converter::constants::{INDENT, MEDIA_ALL};
use crate::converter::dialect::Dialect;
use crate::converter::formatter::format_token;
use crate::converter::token::Token;
use crate::converter::tree::{NodeEntry, SelectorNode, StyleTree};
use crate::converter::variables::VariableTable;

/// Render a full stylesheet
pub fn render(
    top_level: &[Token],
    tree: &StyleTree,
    variables: Option<&VariableTable>,
    dialect: Dialect,
) -> String {
    let mut output = String::new();

    if let Some(variables) = variables {
        render_variables(&mut output, variables, dialect);
    }

    for token in top_level {
        output.push_str(&format_token(token, 0));
        output.push('\n');
    }

    render_tree(&mut output, tree);
    output
}

/// One declaration line per variable, followed by a blank line if any were written
pub fn render_variables(output: &mut String, variables: &VariableTable, dialect: Dialect) {
    if variables.is_empty() {
        return;
    }
    for (_, values) in variables.iter() {
        for (value, name) in values.iter() {
            output.push_str(&dialect.variable_declaration(name, value));
            output.push('\n');
        }
    }
    output.push('\n');
}

/// Render every media type of the tree in insertion order
pub fn render_tree(output: &mut String, tree: &StyleTree) {
    for (media_type, node) in tree.iter() {
        if media_type == MEDIA_ALL {
            render_node(output, node, 0);
        } else {
            output.push_str(&format!("@media {} {{\n", media_type));
            render_node(output, node, 1);
            output.push_str("}\n");
        }
    }
}

/// Render the entries of `node` at `level`.
///
/// Child selectors open a block at `level`; declarations attached to the node
/// itself are written at `level` too, which puts them one tab inside the
/// parent's braces.
pub fn render_node(output: &mut String, node: &SelectorNode, level: usize) {
    let indentation = INDENT.repeat(level);

    for entry in node.entries() {
        match entry {
            NodeEntry::Rules(rules) => {
                for rule in rules {
                    output.push_str(&indentation);
                    output.push_str(rule);
                    output.push('\n');
                }
            }
            NodeEntry::Child(key, child) => {
                output.push_str(&format!("{}{} {{\n", indentation, key));
                render_node(output, child, level + 1);
                output.push_str(&format!("{}}}\n", indentation));
            }
        }
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
