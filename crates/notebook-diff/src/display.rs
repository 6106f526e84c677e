//! Decide how a selected submission file is shown.
//!
//! A grading view selects one file of a submission at a time. Notebooks are
//! compared against the reference solution when one exists and shown on
//! their own otherwise; any other file is shown as highlighted source.

use crate::align::compare_notebooks;
use crate::compose::{compose_comparison, NotebookViewer, ViewOptions};
use crate::model::DiffSummary;
use crate::parser::ParseError;
use crate::render::{escape_html, CellRenderer};
use std::path::Path;
use thiserror::Error;

/// Extension of notebook files.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

const LOAD_FAILED_MESSAGE: &str = "Error loading notebook";
const COMPARE_FAILED_MESSAGE: &str = "Error comparing notebooks";

/// How a file's content is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Notebook,
    Source,
}

impl FileKind {
    /// Classify a file by its extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Self {
        let is_notebook = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(NOTEBOOK_EXTENSION));

        if is_notebook {
            FileKind::Notebook
        } else {
            FileKind::Source
        }
    }
}

/// Errors for reference-solution uploads.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Please upload a Jupyter notebook file (.ipynb), got {0}")]
    NotANotebook(String),
}

/// Check that a reference-solution upload is a notebook.
pub fn validate_notebook_upload(file_name: &str) -> Result<(), UploadError> {
    match FileKind::from_file_name(file_name) {
        FileKind::Notebook => Ok(()),
        FileKind::Source => Err(UploadError::NotANotebook(file_name.to_string())),
    }
}

/// Pick the first notebook in a file listing.
pub fn first_notebook<'a, I>(file_names: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    file_names
        .into_iter()
        .find(|name| FileKind::from_file_name(name) == FileKind::Notebook)
}

/// One file to display, with the reference solution if the exercise has one.
#[derive(Debug, Clone, Copy)]
pub struct DisplayRequest<'a> {
    pub file_name: &'a str,
    pub content: &'a str,
    pub reference: Option<&'a str>,
}

impl<'a> DisplayRequest<'a> {
    pub fn new(file_name: &'a str, content: &'a str) -> Self {
        Self {
            file_name,
            content,
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: Option<&'a str>) -> Self {
        self.reference = reference;
        self
    }
}

/// The fragment produced for a [`DisplayRequest`].
#[derive(Debug)]
pub enum Displayed {
    /// Submission notebook compared with the reference.
    NotebookDiff { html: String, summary: DiffSummary },
    /// Notebook shown on its own.
    Notebook { html: String },
    /// Non-notebook file shown as source.
    SourceFile { html: String },
    /// The notebook could not be parsed; `html` is a user-facing alert.
    Failed { html: String, error: ParseError },
}

impl Displayed {
    /// The markup to insert into the page.
    pub fn html(&self) -> &str {
        match self {
            Displayed::NotebookDiff { html, .. }
            | Displayed::Notebook { html }
            | Displayed::SourceFile { html }
            | Displayed::Failed { html, .. } => html,
        }
    }

    pub fn into_html(self) -> String {
        match self {
            Displayed::NotebookDiff { html, .. }
            | Displayed::Notebook { html }
            | Displayed::SourceFile { html }
            | Displayed::Failed { html, .. } => html,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Displayed::Failed { .. })
    }
}

/// Render the requested file.
pub fn display(
    request: &DisplayRequest<'_>,
    renderer: &CellRenderer,
    view: &ViewOptions,
) -> Displayed {
    match (FileKind::from_file_name(request.file_name), request.reference) {
        (FileKind::Notebook, Some(reference)) => {
            display_notebook_diff(reference, request.content, renderer, view)
        }
        (FileKind::Notebook, None) => display_notebook(request.content, renderer, view),
        (FileKind::Source, _) => Displayed::SourceFile {
            html: renderer
                .render_source_file(request.content, source_language(request.file_name)),
        },
    }
}

/// Compare a submission notebook against the reference solution.
pub fn display_notebook_diff(
    reference: &str,
    submission: &str,
    renderer: &CellRenderer,
    view: &ViewOptions,
) -> Displayed {
    match compare_notebooks(reference, submission) {
        Ok(comparison) => {
            let entries = comparison.entries();
            let summary = DiffSummary::from_entries(&entries);
            log::info!("Compared notebooks: {}", summary);
            Displayed::NotebookDiff {
                html: compose_comparison(renderer, &entries, view),
                summary,
            }
        }
        Err(error) => {
            log::error!("Error creating notebook diff: {}", error);
            Displayed::Failed {
                html: alert_fragment(COMPARE_FAILED_MESSAGE),
                error,
            }
        }
    }
}

/// Show a notebook on its own, outputs included.
pub fn display_notebook(content: &str, renderer: &CellRenderer, view: &ViewOptions) -> Displayed {
    match NotebookViewer::new(renderer, view).render_text(content) {
        Ok(html) => Displayed::Notebook { html },
        Err(error) => {
            log::error!("Error parsing notebook: {}", error);
            Displayed::Failed {
                html: alert_fragment(LOAD_FAILED_MESSAGE),
                error,
            }
        }
    }
}

/// A user-visible error box.
pub fn alert_fragment(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger">{}</div>"#,
        escape_html(message)
    )
}

/// Syntax token for a source file, from its extension.
fn source_language(file_name: &str) -> &str {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("txt")
}
