//! Lay out diff entries as a side-by-side comparison.

use super::ViewOptions;
use crate::model::{DiffEntry, DiffStatus};
use crate::render::{escape_html, CellRenderer};

/// Placeholder for the side of a row that has no cell.
const EMPTY_SLOT: &str = "<div></div>";

/// Render diff entries in order.
///
/// - `Added`: empty left slot, submission cell styled as added.
/// - `Removed`: reference cell styled as removed, empty right slot.
/// - `Unchanged`: one merged slot, since both sides are identical.
/// - `Changed`: reference styled as removed next to submission styled as
///   added.
///
/// No entries produce an empty string.
pub fn compose_diff(renderer: &CellRenderer, entries: &[DiffEntry<'_>]) -> String {
    entries
        .iter()
        .map(|entry| compose_entry(renderer, entry))
        .collect()
}

fn compose_entry(renderer: &CellRenderer, entry: &DiffEntry<'_>) -> String {
    match *entry {
        DiffEntry::Added { right } => comparison_row(
            EMPTY_SLOT,
            &renderer.render_cell(right, Some(DiffStatus::Added)),
        ),
        DiffEntry::Removed { left } => comparison_row(
            &renderer.render_cell(left, Some(DiffStatus::Removed)),
            EMPTY_SLOT,
        ),
        DiffEntry::Unchanged { left, .. } => format!(
            r#"<div class="cell-single">{}</div>"#,
            renderer.render_cell(left, Some(DiffStatus::Unchanged))
        ),
        DiffEntry::Changed { left, right } => comparison_row(
            &renderer.render_cell(left, Some(DiffStatus::Removed)),
            &renderer.render_cell(right, Some(DiffStatus::Added)),
        ),
    }
}

fn comparison_row(left: &str, right: &str) -> String {
    format!(r#"<div class="cell-comparison">{}{}</div>"#, left, right)
}

/// Render a complete comparison document: the rows from [`compose_diff`]
/// inside a `notebook-diff` container, optionally preceded by a header
/// naming both columns.
pub fn compose_comparison(
    renderer: &CellRenderer,
    entries: &[DiffEntry<'_>],
    view: &ViewOptions,
) -> String {
    let mut html = String::from(r#"<div class="notebook-diff">"#);
    if view.show_comparison_header {
        html.push_str(&format!(
            concat!(
                r#"<div class="comparison-header">"#,
                r#"<div class="comparison-title">{}</div>"#,
                r#"<div class="comparison-title">{}</div>"#,
                "</div>"
            ),
            escape_html(&view.reference_title),
            escape_html(&view.submission_title)
        ));
    }
    html.push_str(&compose_diff(renderer, entries));
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align;
    use crate::model::{Cell, NotebookDocument};
    use pretty_assertions::assert_eq;

    fn cell_html(renderer: &CellRenderer, cell: &Cell, status: DiffStatus) -> String {
        renderer.render_cell(cell, Some(status))
    }

    #[test]
    fn test_layout_per_status() {
        let renderer = CellRenderer::new();
        let reference = NotebookDocument::new(vec![
            Cell::code("same"),
            Cell::code("old"),
            Cell::code("only in reference"),
        ]);
        let submission = NotebookDocument::new(vec![Cell::code("same"), Cell::code("new")]);
        let entries = align(&reference, &submission);
        let html = compose_diff(&renderer, &entries);

        let expected = [
            format!(
                r#"<div class="cell-single">{}</div>"#,
                cell_html(&renderer, &reference.cells[0], DiffStatus::Unchanged)
            ),
            format!(
                r#"<div class="cell-comparison">{}{}</div>"#,
                cell_html(&renderer, &reference.cells[1], DiffStatus::Removed),
                cell_html(&renderer, &submission.cells[1], DiffStatus::Added)
            ),
            format!(
                r#"<div class="cell-comparison">{}<div></div></div>"#,
                cell_html(&renderer, &reference.cells[2], DiffStatus::Removed)
            ),
        ]
        .concat();
        assert_eq!(html, expected);
    }

    #[test]
    fn test_added_has_empty_left_slot() {
        let renderer = CellRenderer::new();
        let extra = Cell::markdown("extra");
        let html = compose_diff(&renderer, &[DiffEntry::Added { right: &extra }]);
        assert!(html.starts_with(
            r#"<div class="cell-comparison"><div></div><div class="notebook-cell diff-added">"#
        ));
    }

    #[test]
    fn test_unchanged_is_rendered_once() {
        let renderer = CellRenderer::new();
        let cell = Cell::code("print('shared')");
        let html = compose_diff(
            &renderer,
            &[DiffEntry::Unchanged {
                left: &cell,
                right: &cell,
            }],
        );
        assert_eq!(html.matches("shared").count(), 1);
    }

    #[test]
    fn test_empty_entries_render_nothing() {
        let renderer = CellRenderer::new();
        let empty = NotebookDocument::default();
        let entries = align(&empty, &empty);
        assert!(entries.is_empty());
        assert_eq!(compose_diff(&renderer, &entries), "");
    }

    #[test]
    fn test_comparison_header() {
        let renderer = CellRenderer::new();
        let view = ViewOptions::default().with_titles("Reference <1>", "Submission");
        let html = compose_comparison(&renderer, &[], &view);
        assert_eq!(
            html,
            concat!(
                r#"<div class="notebook-diff"><div class="comparison-header">"#,
                r#"<div class="comparison-title">Reference &lt;1&gt;</div>"#,
                r#"<div class="comparison-title">Submission</div></div></div>"#
            )
        );

        let html = compose_comparison(
            &renderer,
            &[],
            &ViewOptions::default().with_comparison_header(false),
        );
        assert_eq!(html, r#"<div class="notebook-diff"></div>"#);
    }

    #[test]
    fn test_entry_order_is_preserved() {
        let renderer = CellRenderer::new();
        let reference =
            NotebookDocument::new((0..5).map(|i| Cell::code(format!("cell_{}", i))).collect());
        let html = compose_diff(&renderer, &align(&reference, &reference));

        let positions: Vec<usize> = (0..5)
            .map(|i| html.find(&format!("cell_{}", i)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
