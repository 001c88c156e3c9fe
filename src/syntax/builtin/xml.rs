//! XML rule set

use crate::syntax::class::DisplayClass;
use crate::syntax::language::{LanguageKind, LanguageRuleSet};

/// Create the XML rule set
pub fn build_xml_rules() -> LanguageRuleSet {
    let mut lang = LanguageRuleSet::new(LanguageKind::Xml);

    lang.add_rule(r"</?[a-zA-Z_][\w:.-]*", DisplayClass::Tag);
    lang.add_captured_rule(r"\b([a-zA-Z_][\w:.-]*)\s*=", 1, DisplayClass::Attribute);
    lang.add_rule(r#""[^"]*""#, DisplayClass::Value);
    lang.add_rule(r"'[^']*'", DisplayClass::Value);
    lang.add_rule(r"&#?[a-zA-Z0-9]+;", DisplayClass::Value);

    // Processing instructions and CDATA markers
    lang.add_rule(r"<\?[\w:-]+|\?>", DisplayClass::Keyword);
    lang.add_rule(r"<!\[CDATA\[|\]\]>", DisplayClass::Keyword);

    lang.set_region_literal("<!--", "-->");

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::LineState;

    fn spans_of(text: &str, class: DisplayClass) -> Vec<(usize, usize)> {
        build_xml_rules()
            .classify_line(text, LineState::NORMAL)
            .spans
            .into_iter()
            .filter(|span| span.class == class)
            .map(|span| (span.start, span.len))
            .collect()
    }

    #[test]
    fn test_declaration() {
        let line = r#"<?xml version="1.0"?>"#;
        assert_eq!(spans_of(line, DisplayClass::Keyword), vec![(0, 5), (19, 2)]);
        assert_eq!(spans_of(line, DisplayClass::Attribute), vec![(6, 7)]);
        assert_eq!(spans_of(line, DisplayClass::Value), vec![(14, 5)]);
    }

    #[test]
    fn test_namespaced_tag() {
        let line = r#"<svg:rect x="1"/>"#;
        assert_eq!(spans_of(line, DisplayClass::Tag), vec![(0, 9)]);
        assert_eq!(spans_of(line, DisplayClass::Attribute), vec![(10, 1)]);
    }

    #[test]
    fn test_cdata() {
        assert_eq!(
            spans_of("<![CDATA[a < b]]>", DisplayClass::Keyword),
            vec![(0, 9), (14, 3)]
        );
    }

    #[test]
    fn test_comment_region() {
        let result = build_xml_rules().classify_line("<a/> <!-- x", LineState::NORMAL);
        assert_eq!(result.end_state, LineState::INSIDE);
    }
}
