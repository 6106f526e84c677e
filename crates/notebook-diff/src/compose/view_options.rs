//! Per-call presentation settings for composed views.

/// Column title for the reference side used by the grading view.
pub const DEFAULT_REFERENCE_TITLE: &str = "Referenzlösung";
/// Column title for the submission side used by the grading view.
pub const DEFAULT_SUBMISSION_TITLE: &str = "Studentenlösung";

/// Presentation settings passed into every compose call.
///
/// There is no shared view state; a caller that switches documents simply
/// composes again with whatever options apply to the new document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    /// Title above the reference column.
    pub reference_title: String,
    /// Title above the submission column.
    pub submission_title: String,
    /// Emit the two-column header in comparison views.
    pub show_comparison_header: bool,
    /// Prefix each cell with `[n]:` in the single-document view.
    pub show_cell_numbers: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            reference_title: DEFAULT_REFERENCE_TITLE.to_string(),
            submission_title: DEFAULT_SUBMISSION_TITLE.to_string(),
            show_comparison_header: true,
            show_cell_numbers: true,
        }
    }
}

impl ViewOptions {
    pub fn with_titles(
        mut self,
        reference_title: impl Into<String>,
        submission_title: impl Into<String>,
    ) -> Self {
        self.reference_title = reference_title.into();
        self.submission_title = submission_title.into();
        self
    }

    pub fn with_comparison_header(mut self, show: bool) -> Self {
        self.show_comparison_header = show;
        self
    }

    pub fn with_cell_numbers(mut self, show: bool) -> Self {
        self.show_cell_numbers = show;
        self
    }
}
