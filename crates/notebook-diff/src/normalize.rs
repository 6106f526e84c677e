//! Strip execution state that should not influence a comparison.

use crate::model::{Cell, NotebookDocument};

/// Return a copy of `doc` with every code cell's outputs and execution
/// counter cleared. The input is left untouched.
pub fn normalize(doc: &NotebookDocument) -> NotebookDocument {
    doc.clone().into_normalized()
}

impl NotebookDocument {
    /// Consuming variant of [`normalize`].
    pub fn into_normalized(mut self) -> Self {
        for cell in &mut self.cells {
            if let Cell::Code {
                execution_count,
                outputs,
                ..
            } = cell
            {
                *execution_count = None;
                outputs.clear();
            }
        }
        self
    }

    /// Whether the document carries no execution state.
    pub fn is_normalized(&self) -> bool {
        self.cells
            .iter()
            .all(|c| c.outputs().is_empty() && c.execution_count().is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Output;
    use pretty_assertions::assert_eq;

    fn executed_notebook() -> NotebookDocument {
        NotebookDocument::new(vec![
            Cell::markdown("# Intro"),
            Cell::code("print(1)").with_outputs(Some(7), vec![Output::stream("1\n")]),
            Cell::code("x").with_outputs(Some(8), vec![Output::execute_result("2")]),
            Cell::raw("raw"),
        ])
    }

    #[test]
    fn test_clears_outputs_and_counters() {
        let doc = executed_notebook();
        let normalized = normalize(&doc);

        assert!(normalized.is_normalized());
        assert_eq!(normalized.cells[1], Cell::code("print(1)"));
        assert_eq!(normalized.cells[2], Cell::code("x"));
        assert_eq!(normalized.cells[0], doc.cells[0]);
        assert_eq!(normalized.cells[3], doc.cells[3]);
    }

    #[test]
    fn test_does_not_touch_input() {
        let doc = executed_notebook();
        let _ = normalize(&doc);

        assert!(!doc.is_normalized());
        assert_eq!(doc.cells_with_outputs(), 2);
    }

    #[test]
    fn test_idempotent() {
        let once = normalize(&executed_notebook());
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sources_survive() {
        let doc = executed_notebook();
        let normalized = doc.clone().into_normalized();
        let sources: Vec<_> = normalized.cells.iter().map(Cell::source).collect();
        let original: Vec<_> = doc.cells.iter().map(Cell::source).collect();
        assert_eq!(sources, original);
    }
}
