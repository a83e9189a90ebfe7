//! Rule extraction
//!
//! Groups the flat token stream into rules: a selector list plus the tokens
//! between its `RulesetStart` and `RulesetEnd`. Tokens outside any ruleset are
//! kept as top-level nodes.

use crate::converter::token::Token;

/// A ruleset: selectors as written in the source plus the tokens it owns
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selectors: Vec<String>,
    pub declarations: Vec<Token>,
}

impl Rule {
    pub fn new(selectors: Vec<String>) -> Self {
        Self {
            selectors,
            declarations: Vec::new(),
        }
    }
}

/// Append-only list of rules in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleList {
    rules: Vec<Rule>,
}

impl RuleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

/// Result of splitting a token stream into top-level nodes and rules
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedRules {
    pub top_level: Vec<Token>,
    pub rules: RuleList,
}

enum ExtractorState {
    Outside,
    InsideRule(Rule),
}

/// Walk the token stream once and collect top-level tokens and rules.
///
/// `@media` boundaries are dropped since every declaration already carries its
/// media types. An unmatched `RulesetEnd` is ignored; a ruleset still open at
/// the end of the stream is discarded together with its declarations.
pub fn extract_rules(tokens: Vec<Token>) -> ExtractedRules {
    let mut extracted = ExtractedRules::default();
    let mut state = ExtractorState::Outside;

    for token in tokens {
        state = match (state, token) {
            (state, Token::AtMediaStart { .. } | Token::AtMediaEnd) => state,
            (previous, Token::RulesetStart { selectors }) => {
                if let ExtractorState::InsideRule(open) = previous {
                    log::warn!(
                        "Ruleset '{}' was never closed, dropping {} declarations",
                        open.selectors.join(","),
                        open.declarations.len()
                    );
                }
                ExtractorState::InsideRule(Rule::new(selectors))
            }
            (ExtractorState::InsideRule(rule), Token::RulesetEnd) => {
                extracted.rules.add_rule(rule);
                ExtractorState::Outside
            }
            (ExtractorState::Outside, Token::RulesetEnd) => {
                log::debug!("Ignoring ruleset end without a matching start");
                ExtractorState::Outside
            }
            (ExtractorState::InsideRule(mut rule), token) => {
                rule.declarations.push(token);
                ExtractorState::InsideRule(rule)
            }
            (ExtractorState::Outside, token) => {
                extracted.top_level.push(token);
                ExtractorState::Outside
            }
        };
    }

    if let ExtractorState::InsideRule(open) = state {
        log::warn!(
            "Token stream ended inside ruleset '{}', dropping {} declarations",
            open.selectors.join(","),
            open.declarations.len()
        );
    }

    extracted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::token::Declaration;

    #[test]
    fn test_groups_declarations_into_rules() {
        let tokens = vec![
            Token::AtCharset { charset: "\"utf-8\"".to_string() },
            Token::ruleset_start(&["html", "body"]),
            Token::declaration(Declaration::new("margin", "0")),
            Token::declaration(Declaration::new("padding", "0").last()),
            Token::RulesetEnd,
        ];

        let extracted = extract_rules(tokens);

        assert_eq!(extracted.top_level.len(), 1);
        assert!(matches!(extracted.top_level[0], Token::AtCharset { .. }));
        assert_eq!(extracted.rules.len(), 1);
        let rule = &extracted.rules.rules()[0];
        assert_eq!(rule.selectors, vec!["html", "body"]);
        assert_eq!(rule.declarations.len(), 2);
    }

    #[test]
    fn test_media_boundaries_are_dropped() {
        let tokens = vec![
            Token::AtMediaStart { media_types: vec!["print".to_string()] },
            Token::ruleset_start(&["#logo"]),
            Token::scoped_declaration(Declaration::new("display", "none").last(), &["print"]),
            Token::RulesetEnd,
            Token::AtMediaEnd,
        ];

        let extracted = extract_rules(tokens);

        assert!(extracted.top_level.is_empty());
        assert_eq!(extracted.rules.len(), 1);
    }

    #[test]
    fn test_unmatched_end_is_ignored() {
        let tokens = vec![
            Token::RulesetEnd,
            Token::ruleset_start(&["p"]),
            Token::declaration(Declaration::new("color", "red").last()),
            Token::RulesetEnd,
            Token::RulesetEnd,
        ];

        let extracted = extract_rules(tokens);

        assert!(extracted.top_level.is_empty());
        assert_eq!(extracted.rules.len(), 1);
    }

    #[test]
    fn test_unterminated_rule_is_discarded() {
        let tokens = vec![
            Token::ruleset_start(&["p"]),
            Token::declaration(Declaration::new("color", "red").last()),
            Token::RulesetEnd,
            Token::ruleset_start(&["div"]),
            Token::declaration(Declaration::new("margin", "0")),
        ];

        let extracted = extract_rules(tokens);

        assert_eq!(extracted.rules.len(), 1);
        assert_eq!(extracted.rules.rules()[0].selectors, vec!["p"]);
        assert!(extracted.top_level.is_empty());
    }

    #[test]
    fn test_comments_inside_rules_stay_with_the_rule() {
        let tokens = vec![
            Token::Comment { text: "/* header */".to_string() },
            Token::ruleset_start(&["a"]),
            Token::Comment { text: "/* inner */".to_string() },
            Token::declaration(Declaration::new("color", "blue").last()),
            Token::RulesetEnd,
        ];

        let extracted = extract_rules(tokens);

        assert_eq!(extracted.top_level.len(), 1);
        assert_eq!(extracted.rules.rules()[0].declarations.len(), 2);
    }
}
