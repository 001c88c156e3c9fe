//! Style types for rendering classified text
//!
//! Spans carry only a [`DisplayClass`]; the host turns a class into a
//! [`Style`] through a [`Theme`]. Styles are plain values built on demand,
//! never shared mutable state.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::class::DisplayClass;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Color scheme mapping display classes to styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Style used to render a display class
    pub fn style(&self, class: DisplayClass) -> Style {
        match self {
            Theme::Light => match class {
                DisplayClass::Keyword | DisplayClass::Tag => Style::fg(Color::Blue).with_bold(),
                DisplayClass::Attribute => Style::fg(Color::Red),
                DisplayClass::Value | DisplayClass::String => Style::fg(Color::Green),
                DisplayClass::Comment => Style::fg(Color::Green).with_italic(),
                DisplayClass::Number => Style::fg(Color::Magenta),
                DisplayClass::Function => Style::fg(Color::BrightBlue).with_italic(),
            },
            Theme::Dark => match class {
                DisplayClass::Keyword | DisplayClass::Tag => {
                    Style::fg(Color::BrightBlue).with_bold()
                }
                DisplayClass::Attribute => Style::fg(Color::BrightRed),
                DisplayClass::Value | DisplayClass::String => Style::fg(Color::BrightGreen),
                DisplayClass::Comment => Style::fg(Color::BrightBlack).with_italic(),
                DisplayClass::Number => Style::fg(Color::BrightMagenta),
                DisplayClass::Function => Style::fg(Color::BrightCyan).with_italic(),
            },
        }
    }

    /// Parse a theme name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// A classified range of a single line
///
/// Offsets are byte offsets into the line text. Hosts that index text by
/// code point or UTF-16 unit convert with [`Span::char_range`] or
/// [`Span::utf16_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Length of this span in bytes
    pub len: usize,
    /// Display class to apply
    pub class: DisplayClass,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, len: usize, class: DisplayClass) -> Self {
        Self { start, len, class }
    }

    /// Byte offset where this span ends (exclusive)
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end()
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The span expressed in code points of `text`
    pub fn char_range(&self, text: &str) -> Range<usize> {
        self.convert(text, |s| s.chars().count())
    }

    /// The span expressed in UTF-16 code units of `text`
    pub fn utf16_range(&self, text: &str) -> Range<usize> {
        self.convert(text, |s| s.encode_utf16().count())
    }

    fn convert(&self, text: &str, measure: impl Fn(&str) -> usize) -> Range<usize> {
        let start = self.start.min(text.len());
        let end = self.end().min(text.len());
        let prefix = text.get(..start).map_or(0, &measure);
        let body = text.get(start..end).map_or(0, &measure);
        prefix..prefix + body
    }
}
