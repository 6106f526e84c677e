//! Diff data structures produced by aligning two notebooks.

use super::Cell;

/// Classification of one aligned position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffStatus {
    Unchanged,
    Added,
    Removed,
    Changed,
}

impl DiffStatus {
    /// Short lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffStatus::Unchanged => "unchanged",
            DiffStatus::Added => "added",
            DiffStatus::Removed => "removed",
            DiffStatus::Changed => "changed",
        }
    }

    /// CSS class used as the style hook on rendered cells.
    pub fn css_class(&self) -> &'static str {
        match self {
            DiffStatus::Unchanged => "diff-unchanged",
            DiffStatus::Added => "diff-added",
            DiffStatus::Removed => "diff-removed",
            DiffStatus::Changed => "diff-changed",
        }
    }

    /// The status seen from the other side of the comparison.
    pub fn mirrored(&self) -> Self {
        match self {
            DiffStatus::Added => DiffStatus::Removed,
            DiffStatus::Removed => DiffStatus::Added,
            other => *other,
        }
    }
}

/// One alignment decision, borrowing cells from the compared documents.
///
/// `left` is the reference side, `right` the submission side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffEntry<'a> {
    Unchanged { left: &'a Cell, right: &'a Cell },
    /// Only the submission has a cell at this position.
    Added { right: &'a Cell },
    /// Only the reference has a cell at this position.
    Removed { left: &'a Cell },
    Changed { left: &'a Cell, right: &'a Cell },
}

impl<'a> DiffEntry<'a> {
    pub fn status(&self) -> DiffStatus {
        match self {
            DiffEntry::Unchanged { .. } => DiffStatus::Unchanged,
            DiffEntry::Added { .. } => DiffStatus::Added,
            DiffEntry::Removed { .. } => DiffStatus::Removed,
            DiffEntry::Changed { .. } => DiffStatus::Changed,
        }
    }

    /// Reference-side cell, absent for `Added`.
    pub fn left(&self) -> Option<&'a Cell> {
        match *self {
            DiffEntry::Unchanged { left, .. }
            | DiffEntry::Removed { left }
            | DiffEntry::Changed { left, .. } => Some(left),
            DiffEntry::Added { .. } => None,
        }
    }

    /// Submission-side cell, absent for `Removed`.
    pub fn right(&self) -> Option<&'a Cell> {
        match *self {
            DiffEntry::Unchanged { right, .. }
            | DiffEntry::Added { right }
            | DiffEntry::Changed { right, .. } => Some(right),
            DiffEntry::Removed { .. } => None,
        }
    }
}

/// Per-status counts for a comparison run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl DiffSummary {
    /// Count the statuses of a sequence of entries.
    pub fn from_entries(entries: &[DiffEntry<'_>]) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            match entry.status() {
                DiffStatus::Unchanged => summary.unchanged += 1,
                DiffStatus::Added => summary.added += 1,
                DiffStatus::Removed => summary.removed += 1,
                DiffStatus::Changed => summary.changed += 1,
            }
        }
        summary
    }

    /// Total number of aligned positions.
    pub fn total(&self) -> usize {
        self.unchanged + self.added + self.removed + self.changed
    }

    /// True when every position is unchanged.
    pub fn is_identical(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.changed == 0
    }
}

impl std::fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} cells: {} unchanged, {} changed, {} added, {} removed",
            self.total(),
            self.unchanged,
            self.changed,
            self.added,
            self.removed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_sides() {
        let a = Cell::code("a");
        let b = Cell::code("b");

        let added = DiffEntry::Added { right: &b };
        assert_eq!(added.status(), DiffStatus::Added);
        assert!(added.left().is_none());
        assert_eq!(added.right(), Some(&b));

        let removed = DiffEntry::Removed { left: &a };
        assert_eq!(removed.left(), Some(&a));
        assert!(removed.right().is_none());

        let changed = DiffEntry::Changed {
            left: &a,
            right: &b,
        };
        assert_eq!(changed.left(), Some(&a));
        assert_eq!(changed.right(), Some(&b));
    }

    #[test]
    fn test_status_mirroring() {
        assert_eq!(DiffStatus::Added.mirrored(), DiffStatus::Removed);
        assert_eq!(DiffStatus::Removed.mirrored(), DiffStatus::Added);
        assert_eq!(DiffStatus::Changed.mirrored(), DiffStatus::Changed);
        assert_eq!(DiffStatus::Unchanged.mirrored(), DiffStatus::Unchanged);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(DiffStatus::Added.css_class(), "diff-added");
        assert_eq!(DiffStatus::Unchanged.css_class(), "diff-unchanged");

        for status in [
            DiffStatus::Unchanged,
            DiffStatus::Added,
            DiffStatus::Removed,
            DiffStatus::Changed,
        ] {
            assert_eq!(status.css_class(), format!("diff-{}", status.as_str()));
        }
    }

    #[test]
    fn test_summary_counts() {
        let a = Cell::code("a");
        let b = Cell::code("b");
        let entries = vec![
            DiffEntry::Unchanged {
                left: &a,
                right: &a,
            },
            DiffEntry::Changed {
                left: &a,
                right: &b,
            },
            DiffEntry::Added { right: &b },
        ];

        let summary = DiffSummary::from_entries(&entries);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.changed, 1);
        assert_eq!(summary.added, 1);
        assert!(!summary.is_identical());
        assert_eq!(
            summary.to_string(),
            "3 cells: 1 unchanged, 1 changed, 1 added, 0 removed"
        );

        assert!(DiffSummary::from_entries(&[]).is_identical());
    }
}
