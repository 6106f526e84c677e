//! Trait for turning code cell sources into highlighted HTML.

use crate::render::escape_html;
use thiserror::Error;

/// Errors that can occur while highlighting code.
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("Highlighting failed: {0}")]
    Failed(String),
}

/// Produces the inner HTML of a `<pre><code>` block for a code source.
///
/// Every character of `source` that is special in HTML must come out
/// escaped; the highlighter may only add its own markup around it.
pub trait CodeHighlighter: Send + Sync {
    /// Highlight `source` written in `language` (a syntax token such as
    /// `python`).
    fn highlight(&self, source: &str, language: &str) -> Result<String, HighlightError>;

    /// CSS needed by the markup this highlighter emits, if any.
    fn stylesheet(&self) -> Option<String> {
        None
    }
}

/// Escapes the source and adds no markup of its own.
///
/// Used when highlighting happens in the browser after the fragment is
/// inserted (e.g. by highlight.js picking up the `<code class="python">`
/// blocks).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl CodeHighlighter for PlainHighlighter {
    fn highlight(&self, source: &str, _language: &str) -> Result<String, HighlightError> {
        Ok(escape_html(source))
    }
}
