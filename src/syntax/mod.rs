//! Syntax highlighting
//!
//! This module provides the line-oriented classification engine:
//! - Per-language rule sets (HTML, CSS, JavaScript, JSON, XML, Markdown)
//! - Multi-line region tracking through a per-line carried state
//! - An incremental per-document cache driving re-highlighting

mod builtin;
mod cache;
mod class;
mod engine;
mod language;
mod rules;
mod style;

pub use builtin::{
    build_css_rules, build_html_rules, build_js_rules, build_json_rules, build_markdown_rules,
    build_rules, build_xml_rules,
};
pub use cache::HighlightCache;
pub use class::DisplayClass;
pub use engine::HighlightEngine;
pub use language::{identifier_for_extension, identifier_for_path, LanguageKind, LanguageRuleSet};
pub use rules::{ClassificationRule, LineResult, LineState, Region};
pub use style::{Color, Span, Style, Theme};
