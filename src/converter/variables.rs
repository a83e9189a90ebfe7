//! Variable extraction
//!
//! Pulls the values of color and font-family properties out into named
//! variables. Names are `<category>_<n>` with a per-category counter over
//! distinct values, so the same literal always maps to the same variable and
//! numbering follows source order.

use crate::converter::constants::VARIABLE_PROPERTIES;
use crate::converter::dialect::Dialect;
use crate::converter::ordered_map::OrderedMap;
use crate::converter::token::Token;

/// Category name for a property: dashes become underscores
pub fn category_name(property: &str) -> String {
    property.replace('-', "_")
}

/// Extracted variables: category -> (literal value -> variable name)
#[derive(Debug, Clone, PartialEq)]
pub struct VariableTable {
    categories: OrderedMap<String, OrderedMap<String, String>>,
}

impl VariableTable {
    /// Table with every category seeded in the fixed category order
    pub fn new() -> Self {
        let mut categories = OrderedMap::new();
        for property in VARIABLE_PROPERTIES {
            categories.insert(category_name(property), OrderedMap::new());
        }
        Self { categories }
    }

    /// Whether `property` has its values extracted
    pub fn is_tracked(property: &str) -> bool {
        VARIABLE_PROPERTIES.contains(&property)
    }

    /// Variable name for `value` of `property`, assigning the next ordinal if unseen.
    /// Returns `None` for properties outside the tracked set.
    pub fn name_for(&mut self, property: &str, value: &str) -> Option<String> {
        if !Self::is_tracked(property) {
            return None;
        }
        let category = category_name(property);
        let values = self
            .categories
            .get_or_insert_with(category.clone(), OrderedMap::new);
        if let Some(name) = values.get(&value.to_string()) {
            return Some(name.clone());
        }
        let name = format!("{}_{}", category, values.len() + 1);
        values.insert(value.to_string(), name.clone());
        Some(name)
    }

    /// Look up an already assigned name
    pub fn get(&self, property: &str, value: &str) -> Option<&str> {
        self.categories
            .get(&category_name(property))
            .and_then(|values| values.get(&value.to_string()))
            .map(|name| name.as_str())
    }

    /// Categories in order, each with its (value, name) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrderedMap<String, String>)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total number of variables across all categories
    pub fn len(&self) -> usize {
        self.categories.values().map(|values| values.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VariableTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace tracked declaration values with variable references.
///
/// Returns the rewritten tokens and the table of extracted variables; the
/// input tokens are left untouched. Only ruleset declarations are considered.
pub fn extract_variables(tokens: &[Token], dialect: Dialect) -> (Vec<Token>, VariableTable) {
    let mut table = VariableTable::new();

    let rewritten: Vec<Token> = tokens
        .iter()
        .map(|token| match token {
            Token::Declaration {
                declaration,
                media_types,
            } => match table.name_for(&declaration.property, &declaration.value) {
                Some(name) => {
                    let mut declaration = declaration.clone();
                    declaration.value = dialect.variable_reference(&name);
                    Token::Declaration {
                        declaration,
                        media_types: media_types.clone(),
                    }
                }
                None => token.clone(),
            },
            other => other.clone(),
        })
        .collect();

    log::debug!("Extracted {} variables", table.len());
    (rewritten, table)
}

#[cfg(test)]
#[path = "variables_tests.rs"]
mod tests;
