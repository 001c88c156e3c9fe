//! Display classes assigned by the highlighter
//!
//! A display class is the semantic tag attached to a span of text.
//! The host maps each class to a visual style (see [`super::Theme`]).

/// Semantic tag for a classified span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayClass {
    /// Language keywords, at-rules, DOCTYPE declarations
    Keyword,
    /// Markup tags and CSS selectors
    Tag,
    /// Markup attribute names and CSS property names
    Attribute,
    /// Attribute values, entities, colors, literal constants
    Value,
    /// Comments, single-line or region
    Comment,
    /// Quoted string literals
    String,
    /// Numeric literals
    Number,
    /// Function calls and pseudo-selectors
    Function,
}

impl DisplayClass {
    /// Every display class, in declaration order
    pub const ALL: [DisplayClass; 8] = [
        DisplayClass::Keyword,
        DisplayClass::Tag,
        DisplayClass::Attribute,
        DisplayClass::Value,
        DisplayClass::Comment,
        DisplayClass::String,
        DisplayClass::Number,
        DisplayClass::Function,
    ];

    /// Get a human-readable name for this class
    pub fn name(&self) -> &'static str {
        match self {
            DisplayClass::Keyword => "Keyword",
            DisplayClass::Tag => "Tag",
            DisplayClass::Attribute => "Attribute",
            DisplayClass::Value => "Value",
            DisplayClass::Comment => "Comment",
            DisplayClass::String => "String",
            DisplayClass::Number => "Number",
            DisplayClass::Function => "Function",
        }
    }

    /// Parse a class from its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }
}
