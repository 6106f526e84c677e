//! Notebook data structures: documents, cells and captured outputs.

use std::collections::BTreeMap;

/// MIME type whose entry is rendered for result and display outputs.
pub const TEXT_PLAIN: &str = "text/plain";

/// A parsed notebook.
///
/// Cells keep the document's presentation order. Nothing in this crate
/// reorders them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotebookDocument {
    /// Cells in presentation order.
    pub cells: Vec<Cell>,
}

impl NotebookDocument {
    /// Create a document from cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the document has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of code cells that still carry outputs.
    pub fn cells_with_outputs(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| !c.outputs().is_empty())
            .count()
    }
}

/// The kind tag of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Code,
    Markdown,
    Raw,
}

impl CellKind {
    /// Map a wire `cell_type` to a kind. Unknown kinds become `Raw`.
    pub fn from_cell_type(cell_type: &str) -> Self {
        match cell_type {
            "code" => CellKind::Code,
            "markdown" => CellKind::Markdown,
            _ => CellKind::Raw,
        }
    }

    /// The wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Code => "code",
            CellKind::Markdown => "markdown",
            CellKind::Raw => "raw",
        }
    }
}

/// A single notebook cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Code {
        source: String,
        /// Execution counter shown as `In [n]` by notebook frontends.
        execution_count: Option<u32>,
        outputs: Vec<Output>,
    },
    Markdown {
        source: String,
    },
    Raw {
        source: String,
    },
}

impl Cell {
    /// Create a code cell without outputs.
    pub fn code(source: impl Into<String>) -> Self {
        Cell::Code {
            source: source.into(),
            execution_count: None,
            outputs: Vec::new(),
        }
    }

    /// Create a markdown cell.
    pub fn markdown(source: impl Into<String>) -> Self {
        Cell::Markdown {
            source: source.into(),
        }
    }

    /// Create a raw cell.
    pub fn raw(source: impl Into<String>) -> Self {
        Cell::Raw {
            source: source.into(),
        }
    }

    /// Attach outputs and an execution counter. No-op for non-code cells.
    pub fn with_outputs(mut self, count: Option<u32>, new_outputs: Vec<Output>) -> Self {
        if let Cell::Code {
            execution_count,
            outputs,
            ..
        } = &mut self
        {
            *execution_count = count;
            *outputs = new_outputs;
        }
        self
    }

    /// The cell's kind tag.
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Code { .. } => CellKind::Code,
            Cell::Markdown { .. } => CellKind::Markdown,
            Cell::Raw { .. } => CellKind::Raw,
        }
    }

    /// Concatenated source text.
    pub fn source(&self) -> &str {
        match self {
            Cell::Code { source, .. } | Cell::Markdown { source } | Cell::Raw { source } => source,
        }
    }

    /// Captured outputs. Always empty for markdown and raw cells.
    pub fn outputs(&self) -> &[Output] {
        match self {
            Cell::Code { outputs, .. } => outputs,
            Cell::Markdown { .. } | Cell::Raw { .. } => &[],
        }
    }

    /// Execution counter of a code cell.
    pub fn execution_count(&self) -> Option<u32> {
        match self {
            Cell::Code {
                execution_count, ..
            } => *execution_count,
            Cell::Markdown { .. } | Cell::Raw { .. } => None,
        }
    }
}

/// Text keyed by MIME type.
pub type MimeBundle = BTreeMap<String, String>;

/// Captured result of executing a code cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Text written to stdout or stderr.
    Stream { name: Option<String>, text: String },
    /// Value of the last expression.
    ExecuteResult { data: MimeBundle },
    /// Explicitly displayed data.
    DisplayData { data: MimeBundle },
    /// Any other `output_type` (e.g. `error`). Kept so parsing never fails on
    /// it; renderers skip it.
    Unsupported { output_type: String },
}

impl Output {
    /// Create a stdout stream output.
    pub fn stream(text: impl Into<String>) -> Self {
        Output::Stream {
            name: Some("stdout".to_string()),
            text: text.into(),
        }
    }

    /// Create an execute result with a `text/plain` entry.
    pub fn execute_result(plain: impl Into<String>) -> Self {
        let mut data = MimeBundle::new();
        data.insert(TEXT_PLAIN.to_string(), plain.into());
        Output::ExecuteResult { data }
    }

    /// The wire `output_type` of this output.
    pub fn output_type(&self) -> &str {
        match self {
            Output::Stream { .. } => "stream",
            Output::ExecuteResult { .. } => "execute_result",
            Output::DisplayData { .. } => "display_data",
            Output::Unsupported { output_type } => output_type,
        }
    }

    /// The text a renderer shows for this output, if any.
    ///
    /// Streams show their text; results and display data show their
    /// `text/plain` entry. Everything else has no text representation.
    pub fn display_text(&self) -> Option<&str> {
        match self {
            Output::Stream { text, .. } => Some(text),
            Output::ExecuteResult { data } | Output::DisplayData { data } => {
                data.get(TEXT_PLAIN).map(String::as_str)
            }
            Output::Unsupported { .. } => None,
        }
    }
}
