//! Data models for notebooks and their comparison.

mod diff;
mod notebook;

pub use diff::{DiffEntry, DiffStatus, DiffSummary};
pub use notebook::{Cell, CellKind, MimeBundle, NotebookDocument, Output, TEXT_PLAIN};
