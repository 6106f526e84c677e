//! Syntax highlighting for code cells.

mod highlighter;

pub use highlighter::{SyntectHighlighter, DEFAULT_THEME};
