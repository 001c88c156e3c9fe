//! Per-document highlighting cache
//!
//! The cache is the caller-owned side of incremental highlighting: the end
//! state and spans of every line, plus the range invalidated by edits.
//! [`HighlightCache::highlight`] re-classifies only what an edit can reach
//! and produces exactly what a full top-to-bottom scan would.

use std::iter;
use std::ops::Range;

use super::engine::HighlightEngine;
use super::rules::LineState;
use super::style::Span;

/// Per-line state and spans for one document
#[derive(Debug, Clone, Default)]
pub struct HighlightCache {
    /// State at the end of each line
    line_states: Vec<LineState>,
    /// Cached spans per line (None = not computed)
    line_spans: Vec<Option<Vec<Span>>>,
    /// First line that needs recomputation
    invalid_from: usize,
    /// Lines below this bound were edited and cannot end a re-scan early
    dirty_until: usize,
    /// Engine generation the cached lines were computed under
    generation: Option<u64>,
}

impl HighlightCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines tracked
    pub fn len(&self) -> usize {
        self.line_states.len()
    }

    /// Check if the cache tracks no lines
    pub fn is_empty(&self) -> bool {
        self.line_states.is_empty()
    }

    /// Spans of a line, if computed
    pub fn spans(&self, line: usize) -> Option<&[Span]> {
        self.line_spans.get(line)?.as_deref()
    }

    /// State at the end of a line
    pub fn state(&self, line: usize) -> LineState {
        self.line_states.get(line).copied().unwrap_or_default()
    }

    /// Mark a single edited line
    ///
    /// Lines after it are re-classified only while their input state changes.
    pub fn invalidate_line(&mut self, line: usize) {
        self.invalid_from = self.invalid_from.min(line);
        self.dirty_until = self.dirty_until.max(line.saturating_add(1));
        if let Some(spans) = self.line_spans.get_mut(line) {
            *spans = None;
        }
    }

    /// Invalidate cache from a specific line onwards
    pub fn invalidate_from(&mut self, line: usize) {
        self.invalid_from = self.invalid_from.min(line);
        self.dirty_until = usize::MAX;
        for spans in self.line_spans.iter_mut().skip(line) {
            *spans = None;
        }
    }

    /// Invalidate entire cache
    pub fn invalidate_all(&mut self) {
        self.invalid_from = 0;
        self.dirty_until = usize::MAX;
        self.line_states.clear();
        self.line_spans.clear();
    }

    /// Replace `removed` lines starting at `at` with `inserted` new lines
    pub fn splice_lines(&mut self, at: usize, removed: usize, inserted: usize) {
        let at = at.min(self.len());
        let removed_end = at.saturating_add(removed).min(self.len());

        // The line after the splice was last classified with this input state
        let carried = match removed_end {
            0 => LineState::NORMAL,
            end => self.line_states[end - 1],
        };
        self.line_states
            .splice(at..removed_end, iter::repeat(carried).take(inserted));
        self.line_spans
            .splice(at..removed_end, iter::repeat(None).take(inserted));

        let shifted = match self.dirty_until {
            usize::MAX => usize::MAX,
            bound if bound >= removed_end => bound - (removed_end - at) + inserted,
            bound if bound > at => at + inserted,
            bound => bound,
        };
        self.invalid_from = self.invalid_from.min(at);
        self.dirty_until = shifted.max(at + inserted);
        if inserted == 0 && removed_end > at {
            // No stored state carries `carried` now; the line after the
            // splice must be re-classified under its new predecessor
            self.dirty_until = self.dirty_until.max(at + 1);
        }
    }

    /// Bring the cache up to date with `lines`.
    ///
    /// Returns the range of lines that were re-classified.
    pub fn highlight<S: AsRef<str>>(
        &mut self,
        engine: &HighlightEngine,
        lines: &[S],
    ) -> Range<usize> {
        if self.generation != Some(engine.generation()) {
            log::trace!("rule set changed, re-highlighting from line 0");
            self.invalidate_all();
            self.generation = Some(engine.generation());
        }

        let count = lines.len();
        if self.len() != count {
            // The caller did not splice; anything past the common prefix is suspect
            let common = self.len().min(count);
            self.line_states.resize(count, LineState::NORMAL);
            self.line_spans.resize(count, None);
            self.invalidate_from(common);
        }

        let start = self.invalid_from.min(count);
        let mut state = match start {
            0 => LineState::NORMAL,
            line => self.line_states[line - 1],
        };
        let mut line = start;

        while line < count {
            let result = engine.classify_line(lines[line].as_ref(), state);
            // Stored end states are the inputs the following lines were built with
            let converged =
                line + 1 >= self.dirty_until && self.line_states[line] == result.end_state;

            self.line_states[line] = result.end_state;
            self.line_spans[line] = Some(result.spans);
            state = result.end_state;
            line += 1;

            if converged {
                break;
            }
        }

        self.invalid_from = count;
        self.dirty_until = 0;
        log::trace!("re-highlighted lines {}..{} of {}", start, line, count);
        start..line
    }
}
