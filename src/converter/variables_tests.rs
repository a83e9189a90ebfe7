use crate::converter::dialect::Dialect;
use crate::converter::token::{Declaration, Token};
use crate::converter::variables::{VariableTable, category_name, extract_variables};

fn value_of(token: &Token) -> &str {
    match token {
        Token::Declaration { declaration, .. } => &declaration.value,
        other => panic!("expected declaration, got {:?}", other),
    }
}

#[test]
fn test_repeated_values_reuse_names() {
    let tokens = vec![
        Token::declaration(Declaration::new("color", "red")),
        Token::declaration(Declaration::new("color", "blue")),
        Token::declaration(Declaration::new("color", "red").last()),
    ];

    let (rewritten, table) = extract_variables(&tokens, Dialect::Less);

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("color", "red"), Some("color_1"));
    assert_eq!(table.get("color", "blue"), Some("color_2"));
    assert_eq!(value_of(&rewritten[0]), "@color_1");
    assert_eq!(value_of(&rewritten[1]), "@color_2");
    assert_eq!(value_of(&rewritten[2]), "@color_1");
}

#[test]
fn test_ordinals_are_per_category() {
    let tokens = vec![
        Token::declaration(Declaration::new("color", "red")),
        Token::declaration(Declaration::new("background-color", "red")),
        Token::declaration(Declaration::new("font-family", "Arial, sans-serif")),
    ];

    let (rewritten, table) = extract_variables(&tokens, Dialect::Less);

    assert_eq!(table.get("background-color", "red"), Some("background_color_1"));
    assert_eq!(table.get("font-family", "Arial, sans-serif"), Some("font_family_1"));
    assert_eq!(value_of(&rewritten[1]), "@background_color_1");
}

#[test]
fn test_untracked_properties_pass_through() {
    let tokens = vec![
        Token::declaration(Declaration::new("margin", "0")),
        Token::declaration(Declaration::new("background", "white")),
    ];

    let (rewritten, table) = extract_variables(&tokens, Dialect::Less);

    assert!(table.is_empty());
    assert_eq!(rewritten, tokens);
}

#[test]
fn test_input_tokens_are_not_mutated() {
    let tokens = vec![Token::declaration(Declaration::new("color", "red"))];

    let (rewritten, _) = extract_variables(&tokens, Dialect::Scss);

    assert_eq!(value_of(&tokens[0]), "red");
    assert_eq!(value_of(&rewritten[0]), "$color_1");
}

#[test]
fn test_only_ruleset_declarations_are_extracted() {
    let tokens = vec![
        Token::AtFontFaceDeclaration(Declaration::new("font-family", "\"CrassRoots\"")),
        Token::AtKeyframesRulesetDeclaration(Declaration::new("color", "red")),
    ];

    let (rewritten, table) = extract_variables(&tokens, Dialect::Less);

    assert!(table.is_empty());
    assert_eq!(rewritten, tokens);
}

#[test]
fn test_media_types_are_kept() {
    let tokens = vec![Token::scoped_declaration(
        Declaration::new("outline-color", "#000").important(),
        &["print"],
    )];

    let (rewritten, _) = extract_variables(&tokens, Dialect::Less);

    match &rewritten[0] {
        Token::Declaration {
            declaration,
            media_types,
        } => {
            assert_eq!(declaration.value, "@outline_color_1");
            assert!(declaration.is_important);
            assert_eq!(media_types, &vec!["print".to_string()]);
        }
        other => panic!("expected declaration, got {:?}", other),
    }
}

#[test]
fn test_categories_iterate_in_fixed_order() {
    let mut table = VariableTable::new();
    table.name_for("outline-color", "black");
    table.name_for("color", "red");

    let categories: Vec<&str> = table.iter().map(|(category, _)| category).collect();
    assert_eq!(categories.first(), Some(&"color"));
    assert_eq!(categories.last(), Some(&"outline_color"));
    assert_eq!(categories.len(), 9);
}

#[test]
fn test_extraction_is_deterministic() {
    let tokens = vec![
        Token::declaration(Declaration::new("border-color", "#ccc")),
        Token::declaration(Declaration::new("color", "#333")),
        Token::declaration(Declaration::new("border-color", "#ddd")),
    ];

    let first = extract_variables(&tokens, Dialect::Less);
    let second = extract_variables(&tokens, Dialect::Less);

    assert_eq!(first, second);
}

#[test]
fn test_category_name() {
    assert_eq!(category_name("border-top-color"), "border_top_color");
    assert!(VariableTable::is_tracked("border-left-color"));
    assert!(!VariableTable::is_tracked("border-width"));
}
