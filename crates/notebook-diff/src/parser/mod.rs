//! Parsers for notebook documents.

mod notebook;

pub use notebook::{parse_notebook, ParseError};
