//! weblight - incremental syntax highlighting for web languages
//!
//! The [`syntax`] module classifies text one line at a time for HTML, CSS
//! and JavaScript (plus JSON and XML), carrying block-comment state across
//! lines. [`render`] resolves overlapping spans for display and [`config`]
//! loads user settings.
//!
//! ```
//! use weblight::syntax::{DisplayClass, HighlightEngine, LineState};
//!
//! let mut engine = HighlightEngine::new();
//! engine.set_language("javascript");
//! let result = engine.classify_line("class Foo {}", LineState::NORMAL);
//! assert_eq!(result.spans[0].class, DisplayClass::Keyword);
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod syntax;

pub use error::{Error, Result};
