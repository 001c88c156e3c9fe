//! CSS rule set

use crate::syntax::class::DisplayClass;
use crate::syntax::language::{LanguageKind, LanguageRuleSet};

/// Create the CSS rule set
pub fn build_css_rules() -> LanguageRuleSet {
    let mut lang = LanguageRuleSet::new(LanguageKind::Css);

    // Property names, including the colon
    lang.add_rule(r"\b[a-zA-Z-]+\s*:", DisplayClass::Attribute);

    // Selector immediately preceding a block
    lang.add_captured_rule(r"\b([a-zA-Z0-9_][a-zA-Z0-9_>-]*)\s*\{", 1, DisplayClass::Tag);

    // Hex colors
    lang.add_rule(r"#[0-9a-fA-F]+", DisplayClass::Value);

    // Numbers with optional unit
    lang.add_rule(
        concat!(
            r"\b[0-9]+(?:\.[0-9]+)?",
            r"(?:%|(?:vmin|vmax|rem|deg|px|em|ex|ch|vh|vw|in|cm|mm|pt|pc|fr|ms|s)\b|\b)",
        ),
        DisplayClass::Number,
    );

    // Function-like values
    lang.add_rule(
        r"\b(?:url|rgba?|hsla?|calc|var|linear-gradient|radial-gradient)\s*\(",
        DisplayClass::Function,
    );

    // At-rules: @media, @import
    lang.add_rule(r"@[a-zA-Z][\w-]*", DisplayClass::Keyword);

    // Pseudo-classes and pseudo-elements
    lang.add_rule(r"::?[a-zA-Z][\w-]*", DisplayClass::Function);

    lang.add_rule(r#""[^"]*""#, DisplayClass::String);
    lang.add_rule(r"'[^']*'", DisplayClass::String);

    lang.set_region_literal("/*", "*/");

    lang
}
