//! Render a single notebook without comparison.

use super::ViewOptions;
use crate::model::NotebookDocument;
use crate::parser::{parse_notebook, ParseError};
use crate::render::CellRenderer;

/// Render every cell of `doc` in order with no status styling.
///
/// The document is rendered as given; outputs are shown if present.
pub fn compose_single(renderer: &CellRenderer, doc: &NotebookDocument) -> String {
    doc.cells
        .iter()
        .map(|cell| renderer.render_cell(cell, None))
        .collect()
}

/// Single-document viewer used outside grading.
///
/// Unlike the comparison path it never normalizes, so a learner sees the
/// outputs of their own notebook.
#[derive(Debug)]
pub struct NotebookViewer<'a> {
    renderer: &'a CellRenderer,
    view: &'a ViewOptions,
}

impl<'a> NotebookViewer<'a> {
    pub fn new(renderer: &'a CellRenderer, view: &'a ViewOptions) -> Self {
        Self { renderer, view }
    }

    /// Render a parsed document.
    pub fn render(&self, doc: &NotebookDocument) -> String {
        if !self.view.show_cell_numbers {
            return compose_single(self.renderer, doc);
        }

        doc.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| self.renderer.render_numbered_cell(cell, index + 1))
            .collect()
    }

    /// Parse and render raw notebook text.
    pub fn render_text(&self, raw: &str) -> Result<String, ParseError> {
        let doc = parse_notebook(raw)?;
        Ok(self.render(&doc))
    }
}
