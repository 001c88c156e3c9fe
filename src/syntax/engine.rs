//! The highlight engine
//!
//! [`HighlightEngine`] owns the active rule set and classifies one line at a
//! time. It never stores document text or per-line state; callers pass the
//! previous line's state in and keep the returned one (see
//! [`super::HighlightCache`] for a ready-made driver).

use super::builtin;
use super::language::{LanguageKind, LanguageRuleSet};
use super::rules::{LineResult, LineState};

/// Line-oriented syntax highlighter for a single language at a time
#[derive(Debug, Clone, Default)]
pub struct HighlightEngine {
    rules: LanguageRuleSet,
    /// Bumped on every language change; a cache built under an older
    /// generation must re-highlight from line 0.
    generation: u64,
}

impl HighlightEngine {
    /// Create an engine with no highlighting
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine for a language identifier
    pub fn for_language(identifier: &str) -> Self {
        let mut engine = Self::new();
        engine.set_language(identifier);
        engine
    }

    /// Replace the active rule set.
    ///
    /// Unknown identifiers select plain text. Every call, even one that
    /// selects the same language again, requests a full re-highlight.
    pub fn set_language(&mut self, identifier: &str) -> LanguageKind {
        let kind = LanguageKind::from_identifier(identifier);
        self.rules = builtin::build_rules(kind);
        self.generation = self.generation.wrapping_add(1);
        log::debug!(
            "language set to {} ({:?} requested): {} rules, region: {}",
            kind,
            identifier,
            self.rules.rules().len(),
            self.rules.region().is_some()
        );
        kind
    }

    /// Active language
    pub fn language(&self) -> LanguageKind {
        self.rules.kind()
    }

    /// Active rule set
    pub fn rules(&self) -> &LanguageRuleSet {
        &self.rules
    }

    /// Rule-set generation, changed by every [`Self::set_language`]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Classify one line given the state at the end of the previous line
    pub fn classify_line(&self, text: &str, previous: LineState) -> LineResult {
        self.rules.classify_line(text, previous)
    }

    /// Classify a whole document from the top
    pub fn classify_document<S: AsRef<str>>(&self, lines: &[S]) -> Vec<LineResult> {
        let mut state = LineState::NORMAL;
        lines
            .iter()
            .map(|line| {
                let result = self.classify_line(line.as_ref(), state);
                state = result.end_state;
                result
            })
            .collect()
    }
}
