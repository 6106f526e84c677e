//! Positional alignment of a reference notebook against a submission.

use crate::model::{DiffEntry, DiffSummary, NotebookDocument};
use crate::parser::{parse_notebook, ParseError};

/// Pair the cells of two notebooks by index and classify each position.
///
/// Cells are compared by source text only, so outputs never make two cells
/// differ. Positions past the end of the shorter document become `Added`
/// (only the submission has a cell) or `Removed` (only the reference has
/// one). The result has `max(reference.len(), submission.len())` entries in
/// index order.
///
/// Matching is strictly positional: inserting a cell in the middle of the
/// submission shifts every later index and shows up as a run of `Changed`
/// entries rather than a single insertion.
pub fn align<'a>(
    reference: &'a NotebookDocument,
    submission: &'a NotebookDocument,
) -> Vec<DiffEntry<'a>> {
    let len = reference.len().max(submission.len());
    let mut entries = Vec::with_capacity(len);

    for i in 0..len {
        let entry = match (reference.cells.get(i), submission.cells.get(i)) {
            (None, Some(right)) => DiffEntry::Added { right },
            (Some(left), None) => DiffEntry::Removed { left },
            (Some(left), Some(right)) if left.source() == right.source() => {
                DiffEntry::Unchanged { left, right }
            }
            (Some(left), Some(right)) => DiffEntry::Changed { left, right },
            (None, None) => break,
        };
        log::trace!("Cell {} is {}", i, entry.status().as_str());
        entries.push(entry);
    }

    entries
}

/// Two parsed and normalized notebooks, ready to be aligned.
///
/// Owns both documents so that the borrowed [`DiffEntry`] values produced by
/// [`NotebookComparison::entries`] can live as long as the comparison.
#[derive(Debug, Clone)]
pub struct NotebookComparison {
    pub reference: NotebookDocument,
    pub submission: NotebookDocument,
}

impl NotebookComparison {
    /// Normalize both documents and keep them for alignment.
    pub fn new(reference: NotebookDocument, submission: NotebookDocument) -> Self {
        Self {
            reference: reference.into_normalized(),
            submission: submission.into_normalized(),
        }
    }

    /// Aligned entries in index order.
    pub fn entries(&self) -> Vec<DiffEntry<'_>> {
        align(&self.reference, &self.submission)
    }

    /// Status counts for the alignment.
    pub fn summary(&self) -> DiffSummary {
        DiffSummary::from_entries(&self.entries())
    }
}

/// Parse and normalize a reference and a submission.
///
/// Fails if either document cannot be parsed.
pub fn compare_notebooks(
    reference_raw: &str,
    submission_raw: &str,
) -> Result<NotebookComparison, ParseError> {
    let reference = parse_notebook(reference_raw)?;
    let submission = parse_notebook(submission_raw)?;
    Ok(NotebookComparison::new(reference, submission))
}
