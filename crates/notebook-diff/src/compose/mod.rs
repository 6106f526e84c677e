//! Compose rendered cells into comparison and single-document views.

mod comparison;
mod single;
mod view_options;

pub use comparison::{compose_comparison, compose_diff};
pub use single::{compose_single, NotebookViewer};
pub use view_options::{ViewOptions, DEFAULT_REFERENCE_TITLE, DEFAULT_SUBMISSION_TITLE};
