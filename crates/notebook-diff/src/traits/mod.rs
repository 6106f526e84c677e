//! Extension traits for customizing how cells are rendered.

mod code_highlighter;
mod markdown_converter;

pub use code_highlighter::{CodeHighlighter, HighlightError, PlainHighlighter};
pub use markdown_converter::{
    CommonMarkConverter, MarkdownConverter, RenderError, DEFAULT_MAX_MARKDOWN_BYTES,
};
