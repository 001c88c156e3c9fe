//! Span resolution for display
//!
//! Spans may overlap. They are applied in order, each one overwriting the
//! classes of the bytes it covers, and the result is cut into runs of
//! uniformly classified text.

use crate::syntax::{DisplayClass, Span};

/// A run of text sharing one display class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// None for unclassified text
    pub class: Option<DisplayClass>,
}

/// Final class of every byte of `text` after applying `spans` in order
pub fn resolve(text: &str, spans: &[Span]) -> Vec<Option<DisplayClass>> {
    let mut classes = vec![None; text.len()];
    for span in spans {
        let end = span.end().min(text.len());
        if span.start < end {
            classes[span.start..end].fill(Some(span.class));
        }
    }
    classes
}

/// Cut `text` into runs of uniform class
pub fn segments<'a>(text: &'a str, spans: &[Span]) -> Vec<Segment<'a>> {
    let classes = resolve(text, spans);
    let mut segments = Vec::new();
    let mut run_start = 0;
    let mut run_class = None;

    for (offset, _) in text.char_indices() {
        let class = classes[offset];
        if offset > run_start && class != run_class {
            segments.push(Segment {
                text: &text[run_start..offset],
                class: run_class,
            });
            run_start = offset;
        }
        run_class = class;
    }
    if run_start < text.len() {
        segments.push(Segment {
            text: &text[run_start..],
            class: run_class,
        });
    }
    segments
}
