//! # notebook-diff
//!
//! Compare and render Jupyter notebooks for grading: a reference solution
//! next to a learner's submission, cell by cell, plus a plain viewer for a
//! single notebook.
//!
//! ## Design Principles
//!
//! This crate is a pure transform. It receives raw notebook text and returns
//! HTML fragments; fetching documents and inserting the markup into a page
//! belong to the caller. This enables:
//!
//! - Testability without a browser or HTTP stack
//! - Reuse from a web backend, a CLI, or a WASM frontend
//! - No state shared between calls
//!
//! ## Pipeline
//!
//! parse → normalize (comparison only) → align → compose, with a
//! [`CellRenderer`] turning individual cells into markup. Markdown conversion
//! and code highlighting are pluggable through [`MarkdownConverter`] and
//! [`CodeHighlighter`].
//!
//! ## Usage
//!
//! ```rust
//! use notebook_diff::{compare_notebooks, compose_comparison, CellRenderer, ViewOptions};
//!
//! let reference = r#"{"cells": [{"cell_type": "code", "source": "print(1)"}]}"#;
//! let submission = r#"{"cells": [{"cell_type": "code", "source": "print(2)"}]}"#;
//!
//! let comparison = compare_notebooks(reference, submission)?;
//! let entries = comparison.entries();
//! let html = compose_comparison(&CellRenderer::new(), &entries, &ViewOptions::default());
//! assert!(html.contains("diff-removed"));
//! assert!(html.contains("diff-added"));
//! # Ok::<(), notebook_diff::ParseError>(())
//! ```

pub mod align;
pub mod compose;
pub mod display;
pub mod highlight;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod render;
pub mod traits;

// Re-export commonly used types
pub use align::{align, compare_notebooks, NotebookComparison};
pub use compose::{compose_comparison, compose_diff, compose_single, NotebookViewer, ViewOptions};
pub use display::{
    display, first_notebook, validate_notebook_upload, DisplayRequest, Displayed, FileKind,
    UploadError,
};
pub use highlight::SyntectHighlighter;
pub use model::{
    Cell, CellKind, DiffEntry, DiffStatus, DiffSummary, MimeBundle, NotebookDocument, Output,
};
pub use normalize::normalize;
pub use parser::{parse_notebook, ParseError};
pub use render::{escape_html, CellRenderer};
pub use traits::{
    CodeHighlighter, CommonMarkConverter, HighlightError, MarkdownConverter, PlainHighlighter,
    RenderError,
};
