//! JSON rule set

use crate::syntax::class::DisplayClass;
use crate::syntax::language::{LanguageKind, LanguageRuleSet};

/// Create the JSON rule set
pub fn build_json_rules() -> LanguageRuleSet {
    let mut lang = LanguageRuleSet::new(LanguageKind::Json);

    lang.add_rule(r"-?\b[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?\b", DisplayClass::Number);
    lang.add_keywords(&["true", "false", "null"], DisplayClass::Keyword);
    lang.add_rule(r#""(?:[^"\\]|\\.)*""#, DisplayClass::String);

    // Object keys win over the string rule
    lang.add_captured_rule(r#"("(?:[^"\\]|\\.)*")\s*:"#, 1, DisplayClass::Attribute);

    lang
}
