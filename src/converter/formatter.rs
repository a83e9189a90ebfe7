//! Single-token formatter
//!
//! Renders one token as a line of nested-block output. At-rule content gets
//! fixed extra indentation relative to `level` so keyframes and font-face
//! bodies line up inside their braces.

use crate::converter::constants::INDENT;
use crate::converter::token::Token;

/// Format `token` indented by `level` tabs
pub fn format_token(token: &Token, level: usize) -> String {
    let indentation = INDENT.repeat(level);

    match token {
        Token::Declaration { declaration, .. } => format!("{}{}", indentation, declaration.body()),
        Token::AtKeyframesStart { at_rule_name, name } => {
            format!("{}@{} \"{}\" {{", indentation, at_rule_name, name)
        }
        Token::AtKeyframesRulesetStart { selectors } => {
            format!("{}{}{} {{", indentation, INDENT, selectors.join(","))
        }
        Token::AtKeyframesRulesetEnd => format!("{}{}}}", indentation, INDENT),
        Token::AtKeyframesRulesetDeclaration(declaration) => {
            format!("{}{}{}{}", indentation, INDENT, INDENT, declaration.body())
        }
        Token::AtCharset { charset } => format!("{}@charset {};", indentation, charset),
        Token::AtFontFaceStart => "@font-face {".to_string(),
        Token::AtFontFaceDeclaration(declaration) => {
            format!("{}{}{}", indentation, INDENT, declaration.body())
        }
        other => format!("{}{}", indentation, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::token::Declaration;

    #[test]
    fn test_format_declaration() {
        let token = Token::declaration(Declaration::new("color", "red"));
        assert_eq!(format_token(&token, 0), "color: red;");
        assert_eq!(format_token(&token, 2), "\t\tcolor: red;");

        let last = Token::declaration(Declaration::new("color", "red").important().last());
        assert_eq!(format_token(&last, 0), "color: red !important");
    }

    #[test]
    fn test_format_keyframes() {
        let start = Token::AtKeyframesStart {
            at_rule_name: "keyframes".to_string(),
            name: "mymove".to_string(),
        };
        assert_eq!(format_token(&start, 0), "@keyframes \"mymove\" {");

        let block = Token::AtKeyframesRulesetStart {
            selectors: vec!["from".to_string()],
        };
        assert_eq!(format_token(&block, 0), "\tfrom {");

        let decl = Token::AtKeyframesRulesetDeclaration(Declaration::new("top", "0px").last());
        assert_eq!(format_token(&decl, 0), "\t\ttop: 0px");
        assert_eq!(format_token(&Token::AtKeyframesRulesetEnd, 0), "\t}");
        assert_eq!(format_token(&Token::AtKeyframesEnd, 0), "}");
    }

    #[test]
    fn test_format_font_face_and_charset() {
        assert_eq!(format_token(&Token::AtFontFaceStart, 3), "@font-face {");
        let decl = Token::AtFontFaceDeclaration(Declaration::new("font-family", "\"CrassRoots\""));
        assert_eq!(format_token(&decl, 0), "\tfont-family: \"CrassRoots\";");
        assert_eq!(format_token(&Token::AtFontFaceEnd, 0), "}");

        let charset = Token::AtCharset { charset: "\"utf-8\"".to_string() };
        assert_eq!(format_token(&charset, 0), "@charset \"utf-8\";");
    }

    #[test]
    fn test_format_raw_fallback() {
        let raw = Token::Raw { text: "@import url(\"base.css\");".to_string() };
        assert_eq!(format_token(&raw, 1), "\t@import url(\"base.css\");");
    }
}
