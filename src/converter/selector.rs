//! Selector normalization
//!
//! Turns a flat CSS selector into the path of segments used to nest it.
//! `html > body p:hover` becomes `["html", ">body", "p", "&:hover"]`: the
//! child combinator gets one canonical spelling, and pseudo-classes and
//! sibling combinators get a `&` marker so they attach to their parent
//! without a space once nested.

use crate::converter::constants::ATTACH_COMBINATORS;

/// Normalize a selector and split it into nesting path segments
pub fn normalize_selector(selector: &str) -> Vec<String> {
    let selector = normalize_child_combinators(selector);
    let selector = insert_pseudo_class_markers(&selector);
    let selector = insert_combinator_markers(&selector, &ATTACH_COMBINATORS);
    split_selector(&selector)
}

/// Give the child combinator one spelling: a space before `>` and none after.
///
/// `div > p`, `div>p` and `div >p` all split into `div` and `>p` afterwards.
pub fn normalize_child_combinators(selector: &str) -> String {
    selector.replace("> ", ">").replace('>', " >")
}

/// Insert ` &` before every pseudo-class colon outside `(..)` and `[..]`.
///
/// A double colon (`::before`) only gets a single marker.
pub fn insert_pseudo_class_markers(selector: &str) -> String {
    let mut out = String::with_capacity(selector.len() + 8);
    let mut nested = false;
    let mut last_was_marked_colon = false;

    for c in selector.chars() {
        // Don't touch anything between (..) and [..]
        nested = matches!(c, '(' | '[') || nested;
        nested = !matches!(c, ')' | ']') && nested;

        if !nested && c == ':' && !last_was_marked_colon {
            out.push_str(" &");
            last_was_marked_colon = true;
        } else {
            last_was_marked_colon = false;
        }

        out.push(c);
    }

    out
}

/// Prefix each combinator in `combinators` with `&` and drop the spaces after it.
///
/// Quoted strings and anything inside `(..)` or `[..]` are left alone, so
/// `:nth-child(2n+1)` and `[class~="a"]` survive. Unlike a quote-only
/// exemption, this also skips combinator characters in attribute selectors
/// and functional pseudo-classes; `a:not(.b + .c)` keeps its inner `+`.
pub fn insert_combinator_markers(selector: &str, combinators: &[char]) -> String {
    let mut out = String::with_capacity(selector.len() + 4);
    let mut quote: Option<char> = None;
    let mut depth: usize = 0;
    let mut skip_spaces = false;

    for c in selector.chars() {
        if c == ' ' && skip_spaces {
            continue;
        }
        skip_spaces = false;

        match quote {
            Some(open) if c == open => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '(' | '[' => depth += 1,
                ')' | ']' => depth = depth.saturating_sub(1),
                _ if depth == 0 && combinators.contains(&c) => {
                    out.push('&');
                    skip_spaces = true;
                }
                _ => {}
            },
        }

        out.push(c);
    }

    out
}

/// Split a selector on whitespace into nesting levels.
///
/// Whitespace inside quotes does not split, so `a[title='hello world']`
/// stays a single segment. Empty segments are dropped.
pub fn split_selector(selector: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in selector.chars() {
        if c.is_whitespace() && quote.is_none() {
            push_segment(&mut segments, &mut current);
            continue;
        }

        match quote {
            Some(open) if c == open => quote = None,
            None if c == '"' || c == '\'' => quote = Some(c),
            _ => {}
        }

        current.push(c);
    }
    push_segment(&mut segments, &mut current);

    segments
}

fn push_segment(segments: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }
    current.clear();
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
