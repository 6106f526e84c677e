//! Standalone HTML page around a rendered fragment

use notebook_diff::render::escape_html;

/// Layout and diff colours for the markup produced by `notebook-diff`
pub const BASE_STYLESHEET: &str = r#"body { font-family: sans-serif; margin: 2em; }
.notebook-cell { border: 1px solid #ddd; border-radius: 4px; margin: 0.5em 0; padding: 0.5em; display: flex; gap: 0.5em; }
.cell-number { color: #303f9f; font-family: monospace; min-width: 3em; }
.cell-content { flex: 1; min-width: 0; }
.cell-content pre { margin: 0; overflow-x: auto; }
.cell-outputs { border-top: 1px dashed #ccc; margin-top: 0.5em; padding-top: 0.5em; }
.output-stream, .output-result { white-space: pre-wrap; font-family: monospace; margin: 0; }
.comparison-header, .cell-comparison { display: grid; grid-template-columns: 1fr 1fr; gap: 1em; }
.comparison-title { font-weight: bold; padding: 0.5em 0; }
.diff-unchanged { background: #fafafa; }
.diff-changed { background: #fff8e1; border-color: #ffb300; }
.diff-added { background: #e8f5e9; border-color: #43a047; }
.diff-removed { background: #ffebee; border-color: #e53935; }
.alert-danger { color: #b71c1c; background: #ffebee; border: 1px solid #e53935; padding: 1em; }
.source-file pre { background: #f5f5f5; padding: 1em; overflow-x: auto; }
"#;

/// Full stylesheet: layout plus the highlighter theme, if any
pub fn stylesheet(highlighter_css: Option<&str>) -> String {
    match highlighter_css {
        Some(css) => format!("{}\n{}", BASE_STYLESHEET, css),
        None => BASE_STYLESHEET.to_string(),
    }
}

/// Wrap `body` in an HTML document with the stylesheet embedded
pub fn standalone(title: &str, body: &str, highlighter_css: Option<&str>) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        stylesheet(highlighter_css),
        body
    )
}
