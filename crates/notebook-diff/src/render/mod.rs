//! HTML rendering of notebook cells.

mod cell;
mod escape;

pub use cell::{CellRenderer, DEFAULT_CODE_LANGUAGE};
pub use escape::escape_html;
