//! Language rule sets for syntax highlighting
//!
//! A [`LanguageRuleSet`] combines ordered single-line rules with at most one
//! multi-line region and classifies one line at a time.

use std::fmt;
use std::path::Path;

use super::class::DisplayClass;
use super::rules::{ClassificationRule, LineResult, LineState, Region};
use super::style::Span;

/// Languages the highlighter knows how to classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageKind {
    /// No highlighting
    #[default]
    PlainText,
    Html,
    Css,
    JavaScript,
    Json,
    Xml,
    Markdown,
}

impl LanguageKind {
    /// Resolve a language identifier (case-insensitive).
    ///
    /// Anything unrecognized, including the empty string, is plain text.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.trim().to_ascii_lowercase().as_str() {
            "html" => LanguageKind::Html,
            "css" => LanguageKind::Css,
            "javascript" | "js" => LanguageKind::JavaScript,
            "json" => LanguageKind::Json,
            "xml" => LanguageKind::Xml,
            "markdown" | "md" => LanguageKind::Markdown,
            _ => LanguageKind::PlainText,
        }
    }

    /// Canonical identifier; empty for plain text
    pub fn identifier(&self) -> &'static str {
        match self {
            LanguageKind::PlainText => "",
            LanguageKind::Html => "html",
            LanguageKind::Css => "css",
            LanguageKind::JavaScript => "javascript",
            LanguageKind::Json => "json",
            LanguageKind::Xml => "xml",
            LanguageKind::Markdown => "markdown",
        }
    }
}

impl fmt::Display for LanguageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageKind::PlainText => f.write_str("plain text"),
            other => f.write_str(other.identifier()),
        }
    }
}

/// Map a file extension to a language identifier.
///
/// Returns `""` for extensions that get no highlighting. C and C++ sources
/// map to `"cpp"`, which the engine has no rules for.
pub fn identifier_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "cpp" | "h" | "hpp" | "cxx" | "cc" => "cpp",
        "js" => "javascript",
        "html" | "htm" => "html",
        "css" => "css",
        "json" => "json",
        "xml" | "svg" | "xsl" => "xml",
        "md" | "markdown" | "mkd" => "markdown",
        _ => "",
    }
}

/// Map a file path to a language identifier by its extension
pub fn identifier_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or("", identifier_for_extension)
}

/// Ordered rules plus an optional region for one language
#[derive(Debug, Clone, Default)]
pub struct LanguageRuleSet {
    kind: LanguageKind,
    rules: Vec<ClassificationRule>,
    region: Option<Region>,
}

impl LanguageRuleSet {
    /// Create an empty rule set
    pub fn new(kind: LanguageKind) -> Self {
        Self {
            kind,
            rules: Vec::new(),
            region: None,
        }
    }

    /// Language this set classifies
    pub fn kind(&self) -> LanguageKind {
        self.kind
    }

    /// Rules in application order
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Multi-line region, if the language has one
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Whether this set classifies nothing
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.region.is_none()
    }

    /// Append a rule built from a pattern; invalid patterns are skipped
    pub fn add_rule(&mut self, pattern: &str, class: DisplayClass) {
        self.add_rule_with(pattern, class, None);
    }

    /// Append a rule classifying only one capture group of each match
    pub fn add_captured_rule(&mut self, pattern: &str, group: usize, class: DisplayClass) {
        self.add_rule_with(pattern, class, Some(group));
    }

    /// Append one whole-word rule per word, all sharing `class`
    pub fn add_keywords(&mut self, words: &[&str], class: DisplayClass) {
        for word in words {
            self.add_rule(&format!(r"\b{}\b", regex::escape(word)), class);
        }
    }

    /// Set the region delimiters, replacing any previous pair
    pub fn set_region(&mut self, region: Region) {
        self.region = Some(region);
    }

    /// Set literal region delimiters; invalid delimiters leave no region
    pub fn set_region_literal(&mut self, start: &str, end: &str) {
        match Region::literal(start, end) {
            Ok(region) => self.region = Some(region),
            Err(err) => {
                log::warn!("{}: skipping region {:?}..{:?}: {}", self.kind, start, end, err)
            }
        }
    }

    fn add_rule_with(&mut self, pattern: &str, class: DisplayClass, group: Option<usize>) {
        match ClassificationRule::new(pattern, class) {
            Ok(rule) => self.rules.push(match group {
                Some(group) => rule.with_capture_group(group),
                None => rule,
            }),
            Err(err) => log::warn!("{}: skipping rule {:?}: {}", self.kind, pattern, err),
        }
    }

    /// Classify a single line of text
    ///
    /// Takes the line text and the state from the previous line.
    /// Returns spans and the state for the next line.
    pub fn classify_line(&self, text: &str, previous: LineState) -> LineResult {
        let mut spans: Vec<Span> = self
            .rules
            .iter()
            .flat_map(|rule| rule.find_spans(text))
            .collect();

        let Some(region) = &self.region else {
            return LineResult {
                spans,
                end_state: LineState::NORMAL,
            };
        };

        let mut end_state = LineState::NORMAL;
        // (span start, offset to search for the closing delimiter from)
        let mut open = if previous.is_inside_region() {
            Some((0, 0))
        } else {
            region.find_start(text, 0)
        };

        while let Some((start, from)) = open {
            match region.find_end(text, from) {
                Some(end) => {
                    spans.push(Span::new(start, end - start, DisplayClass::Comment));
                    open = region.find_start(text, end);
                }
                None => {
                    if start < text.len() {
                        spans.push(Span::new(start, text.len() - start, DisplayClass::Comment));
                    }
                    end_state = LineState::INSIDE;
                    break;
                }
            }
        }

        LineResult { spans, end_state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_language() -> LanguageRuleSet {
        let mut lang = LanguageRuleSet::new(LanguageKind::JavaScript);
        lang.add_rule(r"\b\d+\b", DisplayClass::Number);
        lang.add_rule(r"//.*", DisplayClass::Comment);
        lang.set_region_literal("/*", "*/");
        lang
    }

    #[test]
    fn test_from_identifier() {
        assert_eq!(LanguageKind::from_identifier("HTML"), LanguageKind::Html);
        assert_eq!(LanguageKind::from_identifier("Css"), LanguageKind::Css);
        assert_eq!(LanguageKind::from_identifier("javascript"), LanguageKind::JavaScript);
        assert_eq!(LanguageKind::from_identifier("js"), LanguageKind::JavaScript);
        assert_eq!(LanguageKind::from_identifier("Markdown"), LanguageKind::Markdown);
        assert_eq!(LanguageKind::from_identifier(""), LanguageKind::PlainText);
        assert_eq!(LanguageKind::from_identifier("cpp"), LanguageKind::PlainText);
        assert_eq!(LanguageKind::from_identifier("plaintext"), LanguageKind::PlainText);
    }

    #[test]
    fn test_identifier_for_path() {
        assert_eq!(identifier_for_path(Path::new("index.html")), "html");
        assert_eq!(identifier_for_path(Path::new("INDEX.HTM")), "html");
        assert_eq!(identifier_for_path(Path::new("site.css")), "css");
        assert_eq!(identifier_for_path(Path::new("app.js")), "javascript");
        assert_eq!(identifier_for_path(Path::new("main.cc")), "cpp");
        assert_eq!(identifier_for_path(Path::new("lib.h")), "cpp");
        assert_eq!(identifier_for_path(Path::new("data.json")), "json");
        assert_eq!(identifier_for_path(Path::new("icon.svg")), "xml");
        assert_eq!(identifier_for_path(Path::new("README.md")), "markdown");
        assert_eq!(identifier_for_path(Path::new("README")), "");
        assert_eq!(identifier_for_path(Path::new("notes.txt")), "");
    }

    #[test]
    fn test_rules_apply_in_order() {
        let lang = create_test_language();
        let result = lang.classify_line("x = 42; // 7", LineState::NORMAL);
        assert_eq!(
            result.spans,
            vec![
                Span::new(4, 2, DisplayClass::Number),
                Span::new(11, 1, DisplayClass::Number),
                Span::new(8, 4, DisplayClass::Comment),
            ]
        );
        assert_eq!(result.end_state, LineState::NORMAL);
    }

    #[test]
    fn test_region_start() {
        let lang = create_test_language();
        let result = lang.classify_line("code /* comment", LineState::NORMAL);
        assert!(result.end_state.is_inside_region());
        assert_eq!(result.spans, vec![Span::new(5, 10, DisplayClass::Comment)]);
    }

    #[test]
    fn test_region_continue() {
        let lang = create_test_language();
        let result = lang.classify_line("still 1 inside", LineState::INSIDE);
        assert!(result.end_state.is_inside_region());
        assert_eq!(result.spans.last(), Some(&Span::new(0, 14, DisplayClass::Comment)));
    }

    #[test]
    fn test_region_end_then_reopen() {
        let lang = create_test_language();
        let result = lang.classify_line("a */ b /* c */ d /* e", LineState::INSIDE);
        assert_eq!(
            result.spans,
            vec![
                Span::new(0, 4, DisplayClass::Comment),
                Span::new(7, 7, DisplayClass::Comment),
                Span::new(17, 4, DisplayClass::Comment),
            ]
        );
        assert!(result.end_state.is_inside_region());
    }

    #[test]
    fn test_region_end_may_share_start_characters() {
        let lang = create_test_language();
        let result = lang.classify_line("a /*/ b", LineState::NORMAL);
        assert_eq!(result.spans, vec![Span::new(2, 3, DisplayClass::Comment)]);
        assert_eq!(result.end_state, LineState::NORMAL);
    }

    #[test]
    fn test_fenced_region() {
        let mut lang = LanguageRuleSet::new(LanguageKind::Markdown);
        lang.set_region(Region::fenced(r"^```").unwrap());

        let open = lang.classify_line("```js", LineState::NORMAL);
        assert_eq!(open.spans, vec![Span::new(0, 5, DisplayClass::Comment)]);
        assert!(open.end_state.is_inside_region());

        let close = lang.classify_line("```", open.end_state);
        assert_eq!(close.spans, vec![Span::new(0, 3, DisplayClass::Comment)]);
        assert_eq!(close.end_state, LineState::NORMAL);
    }

    #[test]
    fn test_empty_line_inside_region() {
        let lang = create_test_language();
        let result = lang.classify_line("", LineState::INSIDE);
        assert!(result.spans.is_empty());
        assert!(result.end_state.is_inside_region());
    }

    #[test]
    fn test_no_region_resets_state() {
        let mut lang = LanguageRuleSet::new(LanguageKind::Json);
        lang.add_rule(r"\d+", DisplayClass::Number);
        let result = lang.classify_line("1 /* 2", LineState::INSIDE);
        assert_eq!(result.end_state, LineState::NORMAL);
        assert_eq!(result.spans.len(), 2);
    }

    #[test]
    fn test_invalid_rule_is_skipped() {
        let mut lang = LanguageRuleSet::new(LanguageKind::Css);
        lang.add_rule(r"(unclosed", DisplayClass::Tag);
        lang.add_rule(r"ok", DisplayClass::Tag);
        assert_eq!(lang.rules().len(), 1);
    }

    #[test]
    fn test_keywords_are_whole_words() {
        let mut lang = LanguageRuleSet::new(LanguageKind::JavaScript);
        lang.add_keywords(&["in", "class"], DisplayClass::Keyword);
        assert_eq!(lang.rules().len(), 2);
        assert!(lang.classify_line("inside classify", LineState::NORMAL).spans.is_empty());
        assert_eq!(
            lang.classify_line("a in b", LineState::NORMAL).spans,
            vec![Span::new(2, 2, DisplayClass::Keyword)]
        );
    }

    #[test]
    fn test_empty_set() {
        let lang = LanguageRuleSet::default();
        assert!(lang.is_empty());
        assert_eq!(lang.kind(), LanguageKind::PlainText);
        let result = lang.classify_line("anything /* {}", LineState::INSIDE);
        assert!(result.spans.is_empty());
        assert_eq!(result.end_state, LineState::NORMAL);
    }
}
