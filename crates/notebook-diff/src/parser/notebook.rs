//! Parse notebook JSON (nbformat 4) into a [`NotebookDocument`].

use crate::model::{Cell, CellKind, MimeBundle, NotebookDocument, Output};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur while parsing a notebook.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid notebook JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Notebook has no cells array")]
    MissingCells,
}

/// Text that nbformat stores either as one string or as a list of lines.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MultilineText {
    Single(String),
    Lines(Vec<String>),
}

impl MultilineText {
    fn join(self) -> String {
        match self {
            MultilineText::Single(text) => text,
            MultilineText::Lines(lines) => lines.concat(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireNotebook {
    cells: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct WireOutput {
    output_type: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    text: Option<MultilineText>,
    #[serde(default)]
    data: BTreeMap<String, Value>,
}

/// Parse raw notebook text into a structured document.
///
/// Fails when the text is not valid JSON or has no `cells` array. Nothing is
/// returned on failure. Cell fields are read one by one: a mistyped field
/// falls back to its empty value, unknown cell types become raw cells and
/// unknown output types are kept as [`Output::Unsupported`], so schema drift
/// in one cell never rejects the document.
///
/// # Example
/// ```
/// use notebook_diff::parse_notebook;
///
/// let doc = parse_notebook(r#"{"cells": [{"cell_type": "code", "source": ["x = 1\n", "x"]}]}"#)?;
/// assert_eq!(doc.cells[0].source(), "x = 1\nx");
/// # Ok::<(), notebook_diff::ParseError>(())
/// ```
pub fn parse_notebook(raw: &str) -> Result<NotebookDocument, ParseError> {
    let wire: WireNotebook = serde_json::from_str(raw)?;
    let cells = wire.cells.ok_or(ParseError::MissingCells)?;

    let cells: Vec<Cell> = cells.into_iter().map(parse_cell).collect();
    log::debug!("Parsed notebook with {} cells", cells.len());
    Ok(NotebookDocument::new(cells))
}

fn parse_cell(mut cell: Value) -> Cell {
    let cell_type = cell
        .get("cell_type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let source = cell.get("source").map(parse_source).unwrap_or_default();

    let kind = CellKind::from_cell_type(&cell_type);
    match kind {
        CellKind::Code => {
            let execution_count = cell.get("execution_count").and_then(parse_execution_count);
            let outputs = match cell.get_mut("outputs").map(Value::take) {
                Some(Value::Array(outputs)) => outputs.into_iter().map(parse_output).collect(),
                Some(Value::Null) | None => Vec::new(),
                Some(other) => {
                    log::debug!("Ignoring outputs that are not a list: {}", other);
                    Vec::new()
                }
            };
            Cell::Code {
                source,
                execution_count,
                outputs,
            }
        }
        CellKind::Markdown => Cell::Markdown { source },
        CellKind::Raw => {
            if cell_type != kind.as_str() {
                log::debug!("Treating unknown cell type {:?} as raw", cell_type);
            }
            Cell::Raw { source }
        }
    }
}

/// Cell source as text; anything that is not a string or a list of strings
/// counts as empty.
fn parse_source(value: &Value) -> String {
    match MultilineText::deserialize(value) {
        Ok(text) => text.join(),
        Err(e) => {
            if !value.is_null() {
                log::debug!("Ignoring malformed cell source: {}", e);
            }
            String::new()
        }
    }
}

fn parse_execution_count(value: &Value) -> Option<u32> {
    let count = value.as_u64().and_then(|n| u32::try_from(n).ok());
    if count.is_none() && !value.is_null() {
        log::debug!("Ignoring malformed execution count: {}", value);
    }
    count
}

fn parse_output(value: Value) -> Output {
    let fallback_type = value
        .get("output_type")
        .and_then(|t| t.as_str())
        .unwrap_or("unknown")
        .to_string();

    let output: WireOutput = match serde_json::from_value(value) {
        Ok(output) => output,
        Err(e) => {
            log::debug!("Skipping malformed {} output: {}", fallback_type, e);
            return Output::Unsupported {
                output_type: fallback_type,
            };
        }
    };

    match output.output_type.as_str() {
        "stream" => Output::Stream {
            name: output.name,
            text: output.text.map(MultilineText::join).unwrap_or_default(),
        },
        "execute_result" => Output::ExecuteResult {
            data: parse_mime_bundle(output.data),
        },
        "display_data" => Output::DisplayData {
            data: parse_mime_bundle(output.data),
        },
        _ => Output::Unsupported {
            output_type: output.output_type,
        },
    }
}

/// Keep only the entries whose value is textual.
fn parse_mime_bundle(data: BTreeMap<String, Value>) -> MimeBundle {
    data.into_iter()
        .filter_map(|(mime, value)| match serde_json::from_value::<MultilineText>(value) {
            Ok(text) => Some((mime, text.join())),
            Err(_) => {
                log::trace!("Ignoring non-text {} entry", mime);
                None
            }
        })
        .collect()
}
