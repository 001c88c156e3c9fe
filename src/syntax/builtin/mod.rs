//! Built-in language rule sets
//!
//! Each language module exposes one pure function building its rule set.
//! [`build_rules`] dispatches on [`LanguageKind`].

mod css;
mod html;
mod javascript;
mod json;
mod markdown;
mod xml;

pub use css::build_css_rules;
pub use html::build_html_rules;
pub use javascript::build_js_rules;
pub use json::build_json_rules;
pub use markdown::build_markdown_rules;
pub use xml::build_xml_rules;

use super::language::{LanguageKind, LanguageRuleSet};

/// Build the rule set for a language
pub fn build_rules(kind: LanguageKind) -> LanguageRuleSet {
    match kind {
        LanguageKind::PlainText => LanguageRuleSet::new(LanguageKind::PlainText),
        LanguageKind::Html => build_html_rules(),
        LanguageKind::Css => build_css_rules(),
        LanguageKind::JavaScript => build_js_rules(),
        LanguageKind::Json => build_json_rules(),
        LanguageKind::Xml => build_xml_rules(),
        LanguageKind::Markdown => build_markdown_rules(),
    }
}
