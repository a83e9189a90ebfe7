use crate::converter::dialect::Dialect;
use crate::converter::renderer::{render, render_node, render_variables};
use crate::converter::token::{Declaration, Token};
use crate::converter::tree::{SelectorNode, StyleTree};
use crate::converter::variables::VariableTable;

#[test]
fn test_render_simple_tree() {
    let mut tree = StyleTree::new();
    tree.attach("all", "html p", "margin: 0;".to_string());
    tree.attach("all", "html p", "padding: 0".to_string());

    let output = render(&[], &tree, None, Dialect::Less);

    assert_eq!(output, "html {\n\tp {\n\t\tmargin: 0;\n\t\tpadding: 0\n\t}\n}\n");
}

#[test]
fn test_media_type_wraps_in_media_block() {
    let mut tree = StyleTree::new();
    tree.attach("print", "#logo", "display: none".to_string());
    tree.attach("all", "#logo", "width: 10px".to_string());

    let output = render(&[], &tree, None, Dialect::Less);

    assert_eq!(
        output,
        "@media print {\n\t#logo {\n\t\tdisplay: none\n\t}\n}\n#logo {\n\twidth: 10px\n}\n"
    );
}

#[test]
fn test_top_level_tokens_come_before_tree() {
    let mut tree = StyleTree::new();
    tree.attach("all", "a", "color: red".to_string());
    let top_level = vec![
        Token::AtCharset { charset: "\"utf-8\"".to_string() },
        Token::AtFontFaceStart,
        Token::AtFontFaceDeclaration(Declaration::new("font-family", "\"CrassRoots\"").last()),
        Token::AtFontFaceEnd,
    ];

    let output = render(&top_level, &tree, None, Dialect::Less);

    assert_eq!(
        output,
        "@charset \"utf-8\";\n@font-face {\n\tfont-family: \"CrassRoots\"\n}\na {\n\tcolor: red\n}\n"
    );
}

#[test]
fn test_variable_block_precedes_everything() {
    let mut variables = VariableTable::new();
    variables.name_for("font-family", "Arial");
    variables.name_for("color", "red");
    variables.name_for("color", "blue");

    let output = render(&[], &StyleTree::new(), Some(&variables), Dialect::Less);

    assert_eq!(
        output,
        "@color_1: red;\n@color_2: blue;\n@font_family_1: Arial;\n\n"
    );
}

#[test]
fn test_scss_variable_block() {
    let mut variables = VariableTable::new();
    variables.name_for("border-color", "#ccc");

    let mut output = String::new();
    render_variables(&mut output, &variables, Dialect::Scss);

    assert_eq!(output, "$border_color_1: #ccc;\n\n");
}

#[test]
fn test_empty_variable_table_writes_nothing() {
    let mut output = String::new();
    render_variables(&mut output, &VariableTable::new(), Dialect::Less);
    assert!(output.is_empty());
}

#[test]
fn test_rules_render_between_children_in_insertion_order() {
    let mut tree = StyleTree::new();
    tree.attach("all", "ul li", "margin: 0".to_string());
    tree.attach("all", "ul", "padding: 0".to_string());
    tree.attach("all", "ul a", "color: red".to_string());

    let output = render(&[], &tree, None, Dialect::Less);

    assert_eq!(
        output,
        "ul {\n\tli {\n\t\tmargin: 0\n\t}\n\tpadding: 0\n\ta {\n\t\tcolor: red\n\t}\n}\n"
    );
}

#[test]
fn test_render_node_uses_level_for_indentation() {
    let mut node = SelectorNode::new();
    node.child_or_insert("a").push_rule("color: red".to_string());

    let mut output = String::new();
    render_node(&mut output, &node, 2);

    assert_eq!(output, "\t\ta {\n\t\t\tcolor: red\n\t\t}\n");
}
