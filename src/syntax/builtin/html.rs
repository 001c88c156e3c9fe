//! HTML rule set

use crate::syntax::class::DisplayClass;
use crate::syntax::language::{LanguageKind, LanguageRuleSet};

/// Create the HTML rule set
pub fn build_html_rules() -> LanguageRuleSet {
    let mut lang = LanguageRuleSet::new(LanguageKind::Html);

    // Opening and closing tag markers: <div, </div
    lang.add_rule(r"</?[a-zA-Z0-9_:-]+", DisplayClass::Tag);

    // Attribute names, only when followed by '='
    lang.add_captured_rule(r"\b([a-zA-Z0-9_:-]+)\s*=", 1, DisplayClass::Attribute);

    // Quoted attribute values
    lang.add_rule(r#""[^"]*""#, DisplayClass::Value);
    lang.add_rule(r"'[^']*'", DisplayClass::Value);

    // Character entities: &amp; &#160;
    lang.add_rule(r"&#?[a-zA-Z0-9]+;", DisplayClass::Value);

    lang.add_rule(r"(?i)<!DOCTYPE[^>]*>", DisplayClass::Keyword);

    lang.set_region_literal("<!--", "-->");

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::LineState;
    use crate::syntax::style::Span;

    fn spans_of(text: &str, class: DisplayClass) -> Vec<(usize, usize)> {
        build_html_rules()
            .classify_line(text, LineState::NORMAL)
            .spans
            .into_iter()
            .filter(|span| span.class == class)
            .map(|span| (span.start, span.len))
            .collect()
    }

    #[test]
    fn test_tag_attributes_values() {
        let line = r#"<div id="main" class='x'>"#;
        assert_eq!(spans_of(line, DisplayClass::Tag), vec![(0, 4)]);
        assert_eq!(spans_of(line, DisplayClass::Attribute), vec![(5, 2), (15, 5)]);
        assert_eq!(spans_of(line, DisplayClass::Value), vec![(8, 6), (21, 3)]);
    }

    #[test]
    fn test_closing_tag() {
        assert_eq!(spans_of("<b>x</b>", DisplayClass::Tag), vec![(0, 2), (4, 3)]);
    }

    #[test]
    fn test_unquoted_attribute() {
        assert_eq!(spans_of("<input size=10>", DisplayClass::Attribute), vec![(7, 4)]);
    }

    #[test]
    fn test_entity() {
        assert_eq!(spans_of("a &amp; b &#160;", DisplayClass::Value), vec![(2, 5), (10, 6)]);
    }

    #[test]
    fn test_doctype() {
        assert_eq!(spans_of("<!DOCTYPE html>", DisplayClass::Keyword), vec![(0, 15)]);
        assert_eq!(spans_of("<!doctype html>", DisplayClass::Keyword), vec![(0, 15)]);
        assert!(spans_of("<!DOCTYPE html>", DisplayClass::Tag).is_empty());
    }

    #[test]
    fn test_comment_region() {
        let rules = build_html_rules();
        let result = rules.classify_line("<p>x</p> <!-- note -->", LineState::NORMAL);
        assert_eq!(result.spans.last(), Some(&Span::new(9, 13, DisplayClass::Comment)));
        assert_eq!(result.end_state, LineState::NORMAL);

        let result = rules.classify_line("<!-- open", LineState::NORMAL);
        assert_eq!(result.end_state, LineState::INSIDE);
        let result = rules.classify_line("<b>hidden</b> -->", LineState::INSIDE);
        assert_eq!(result.spans.last(), Some(&Span::new(0, 17, DisplayClass::Comment)));
        assert_eq!(result.end_state, LineState::NORMAL);
    }

    #[test]
    fn test_empty_comment_closes() {
        let rules = build_html_rules();
        let result = rules.classify_line("<!-->", LineState::NORMAL);
        assert_eq!(result.spans.last(), Some(&Span::new(0, 5, DisplayClass::Comment)));
        assert_eq!(result.end_state, LineState::NORMAL);

        let next = rules.classify_line("<p>visible</p>", result.end_state);
        assert!(next.spans.iter().all(|span| span.class != DisplayClass::Comment));
    }
}
