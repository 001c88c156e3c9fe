//! JavaScript rule set

use crate::syntax::class::DisplayClass;
use crate::syntax::language::{LanguageKind, LanguageRuleSet};

/// Control flow, declaration and module keywords
const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "finally", "for", "function", "if",
    "import", "in", "instanceof", "let", "new", "return", "static", "super", "switch", "this",
    "throw", "try", "typeof", "var", "void", "while", "with", "yield",
];

const LITERALS: &[&str] = &["true", "false", "null", "undefined", "NaN", "Infinity"];

/// Create the JavaScript rule set
pub fn build_js_rules() -> LanguageRuleSet {
    let mut lang = LanguageRuleSet::new(LanguageKind::JavaScript);

    // Call sites: the identifier before '('. Added first so that keywords
    // such as `if (` are reclassified by the keyword rules below.
    lang.add_captured_rule(r"\b([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\(", 1, DisplayClass::Function);

    // Numbers: hex, decimal, exponent notation
    lang.add_rule(
        r"\b(?:0[xX][0-9a-fA-F]+|[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?)\b",
        DisplayClass::Number,
    );

    lang.add_keywords(KEYWORDS, DisplayClass::Keyword);
    lang.add_keywords(LITERALS, DisplayClass::Value);

    lang.add_rule(r#""(?:[^"\\]|\\.)*""#, DisplayClass::String);
    lang.add_rule(r"'(?:[^'\\]|\\.)*'", DisplayClass::String);
    lang.add_rule(r"`[^`]*`", DisplayClass::String);

    lang.add_rule(r"//.*", DisplayClass::Comment);

    lang.set_region_literal("/*", "*/");

    lang
}
