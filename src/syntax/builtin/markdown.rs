//! Markdown rule set

use crate::syntax::class::DisplayClass;
use crate::syntax::language::{LanguageKind, LanguageRuleSet};
use crate::syntax::rules::Region;

/// Create the Markdown rule set
pub fn build_markdown_rules() -> LanguageRuleSet {
    let mut lang = LanguageRuleSet::new(LanguageKind::Markdown);

    // Lowest precedence first; later rules win on overlap
    lang.add_rule(r"~~[^~]+~~", DisplayClass::Comment);
    lang.add_rule(r"^\s*(?:[-*+]|[0-9]+\.)\s", DisplayClass::Tag);
    lang.add_rule(r"^(?:---+|\*\*\*+|___+)\s*$", DisplayClass::Tag);
    lang.add_rule(r"^>.*$", DisplayClass::Comment);

    // Links, reference links and images
    lang.add_rule(r"!?\[[^\]]*\]\([^)]+\)", DisplayClass::Value);
    lang.add_rule(r"\[[^\]]+\]\[[^\]]*\]", DisplayClass::Value);

    // Emphasis
    lang.add_rule(r"\*[^*]+\*", DisplayClass::Function);
    lang.add_rule(r"\b_[^_]+_\b", DisplayClass::Function);
    lang.add_rule(r"`[^`]+`", DisplayClass::String);
    lang.add_rule(r"\*\*[^*]+\*\*", DisplayClass::Keyword);
    lang.add_rule(r"__[^_]+__", DisplayClass::Keyword);

    // Headers
    lang.add_rule(r"^#{1,6}\s.*$", DisplayClass::Tag);

    match Region::fenced(r"^\s*```") {
        Ok(region) => lang.set_region(region),
        Err(err) => log::warn!("markdown: skipping code fence: {}", err),
    }

    lang
}
