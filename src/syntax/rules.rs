//! Classification rules for syntax highlighting
//!
//! This module defines the single-line rules and the multi-line region
//! delimiters used to classify source text line by line.

use regex::Regex;

use super::class::DisplayClass;
use super::style::Span;
use crate::error::Result;

/// A single-line pattern rule
///
/// Every non-overlapping match of `pattern` within a line yields a span
/// of `class`. Rules never see more than one line.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Display class assigned to matches
    pub class: DisplayClass,
    /// Only this capture group of each match is classified
    pub capture_group: Option<usize>,
}

impl ClassificationRule {
    /// Create a rule classifying whole matches
    pub fn new(pattern: &str, class: DisplayClass) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            class,
            capture_group: None,
        })
    }

    /// Classify only a capture group of each match.
    ///
    /// Stands in for look-ahead: `\b(\w+)\s*=` with group 1 classifies a
    /// name only when it is followed by `=`.
    pub fn with_capture_group(mut self, group: usize) -> Self {
        self.capture_group = Some(group);
        self
    }

    /// All spans this rule produces for `text`, left to right
    pub fn find_spans(&self, text: &str) -> Vec<Span> {
        match self.capture_group {
            Some(group) => self
                .pattern
                .captures_iter(text)
                .filter_map(|caps| caps.get(group))
                .filter(|m| !m.is_empty())
                .map(|m| Span::new(m.start(), m.len(), self.class))
                .collect(),
            None => self
                .pattern
                .find_iter(text)
                .filter(|m| !m.is_empty())
                .map(|m| Span::new(m.start(), m.len(), self.class))
                .collect(),
        }
    }
}

/// Delimiters of a multi-line construct (block comments)
///
/// A region may open on one line and close several lines later; the
/// open/closed state is carried between lines in [`LineState`].
#[derive(Debug, Clone)]
pub struct Region {
    /// Pattern that opens the region
    pub start: Regex,
    /// Pattern that closes the region
    pub end: Regex,
    /// The closing delimiter cannot reuse the opening one (``` fences)
    pub fenced: bool,
}

impl Region {
    /// Create a region from two regex patterns
    pub fn new(start_pattern: &str, end_pattern: &str) -> Result<Self> {
        Ok(Self {
            start: Regex::new(start_pattern)?,
            end: Regex::new(end_pattern)?,
            fenced: false,
        })
    }

    /// Create a region opened and closed by the same delimiter pattern
    pub fn fenced(pattern: &str) -> Result<Self> {
        Ok(Self {
            fenced: true,
            ..Self::new(pattern, pattern)?
        })
    }

    /// Create a region from literal delimiters such as `/*` and `*/`
    pub fn literal(start: &str, end: &str) -> Result<Self> {
        Self::new(&regex::escape(start), &regex::escape(end))
    }

    /// Find the next region opening at or after `from`
    ///
    /// Returns the opening offset and the offset to search for the closing
    /// delimiter from. That is the opening offset itself, so `/*/` closes,
    /// except for fenced regions where it is the end of the opening match.
    pub fn find_start(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        if from > text.len() {
            return None;
        }
        self.start
            .find_at(text, from)
            .filter(|m| !m.is_empty())
            .map(|m| (m.start(), if self.fenced { m.end() } else { m.start() }))
    }

    /// Find the end offset of the closing delimiter at or after `from`
    pub fn find_end(&self, text: &str, from: usize) -> Option<usize> {
        if from > text.len() {
            return None;
        }
        self.end
            .find_at(text, from)
            .filter(|m| !m.is_empty())
            .map(|m| m.end())
    }
}

/// State carried from the end of one line to the start of the next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LineState {
    /// The line ended inside an unterminated region
    pub inside_region: bool,
}

impl LineState {
    /// Outside any region
    pub const NORMAL: LineState = LineState {
        inside_region: false,
    };

    /// Inside an unterminated region
    pub const INSIDE: LineState = LineState {
        inside_region: true,
    };

    /// Check if we're inside a region
    pub fn is_inside_region(&self) -> bool {
        self.inside_region
    }
}

/// Result of classifying a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    /// Spans in application order; later spans win on overlap
    pub spans: Vec<Span>,
    /// State at end of line (for next line)
    pub end_state: LineState,
}
