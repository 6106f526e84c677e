//! Render individual cells into HTML fragments.

use super::escape_html;
use crate::model::{Cell, DiffStatus, Output};
use crate::traits::{
    CodeHighlighter, CommonMarkConverter, MarkdownConverter, PlainHighlighter,
};

/// Language token used for code cells unless configured otherwise.
pub const DEFAULT_CODE_LANGUAGE: &str = "python";

/// Turns cells into markup using a markdown converter and a code
/// highlighter.
///
/// Rendering never fails: markdown that cannot be converted and code that
/// cannot be highlighted are shown as escaped text.
///
/// # Example
///
/// ```
/// use notebook_diff::{Cell, CellRenderer, DiffStatus};
///
/// let renderer = CellRenderer::new();
/// let html = renderer.render_cell(&Cell::code("x < 1"), Some(DiffStatus::Added));
/// assert!(html.starts_with(r#"<div class="notebook-cell diff-added">"#));
/// assert!(html.contains("x &lt; 1"));
/// ```
pub struct CellRenderer {
    markdown: Box<dyn MarkdownConverter>,
    highlighter: Box<dyn CodeHighlighter>,
    code_language: String,
}

impl std::fmt::Debug for CellRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellRenderer")
            .field("code_language", &self.code_language)
            .finish_non_exhaustive()
    }
}

impl Default for CellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CellRenderer {
    /// CommonMark markdown, escape-only code blocks, Python code cells.
    pub fn new() -> Self {
        Self {
            markdown: Box::new(CommonMarkConverter::new()),
            highlighter: Box::new(PlainHighlighter),
            code_language: DEFAULT_CODE_LANGUAGE.to_string(),
        }
    }

    pub fn with_markdown_converter(mut self, converter: impl MarkdownConverter + 'static) -> Self {
        self.markdown = Box::new(converter);
        self
    }

    pub fn with_highlighter(mut self, highlighter: impl CodeHighlighter + 'static) -> Self {
        self.highlighter = Box::new(highlighter);
        self
    }

    /// Set the language token used for code cells.
    pub fn with_code_language(mut self, language: impl Into<String>) -> Self {
        self.code_language = language.into();
        self
    }

    /// CSS required by the configured highlighter.
    pub fn stylesheet(&self) -> Option<String> {
        self.highlighter.stylesheet()
    }

    /// Render one cell.
    ///
    /// `status` only adds a `diff-<status>` class to the wrapper; the
    /// content is the same with or without it.
    pub fn render_cell(&self, cell: &Cell, status: Option<DiffStatus>) -> String {
        self.render_cell_with_number(cell, status, None)
    }

    /// Render one cell with a `[n]:` label in front of its content.
    pub fn render_numbered_cell(&self, cell: &Cell, number: usize) -> String {
        self.render_cell_with_number(cell, None, Some(number))
    }

    /// Render a whole source file (not a notebook) as one code block.
    pub fn render_source_file(&self, source: &str, language: &str) -> String {
        format!(
            r#"<div class="source-file">{}</div>"#,
            self.code_block(source, language)
        )
    }

    fn render_cell_with_number(
        &self,
        cell: &Cell,
        status: Option<DiffStatus>,
        number: Option<usize>,
    ) -> String {
        let mut html = match status {
            Some(status) => format!(r#"<div class="notebook-cell {}">"#, status.css_class()),
            None => r#"<div class="notebook-cell">"#.to_string(),
        };

        if let Some(number) = number {
            html.push_str(&format!(r#"<div class="cell-number">[{}]:</div>"#, number));
        }

        html.push_str(r#"<div class="cell-content">"#);
        match cell {
            Cell::Code {
                source, outputs, ..
            } => {
                html.push_str(&self.code_block(source, &self.code_language));
                html.push_str(&render_outputs(outputs));
            }
            Cell::Markdown { source } | Cell::Raw { source } => {
                html.push_str(&self.markdown_block(source));
            }
        }
        html.push_str("</div></div>");
        html
    }

    fn code_block(&self, source: &str, language: &str) -> String {
        let body = match self.highlighter.highlight(source, language) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("{}; showing code unhighlighted", e);
                escape_html(source)
            }
        };
        format!(
            r#"<pre><code class="{}">{}</code></pre>"#,
            escape_html(language),
            body
        )
    }

    fn markdown_block(&self, source: &str) -> String {
        match self.markdown.to_html(source) {
            Ok(html) => html,
            Err(e) => {
                log::warn!("{}; showing markdown source as text", e);
                format!("<pre>{}</pre>", escape_html(source))
            }
        }
    }
}

/// Render the text outputs of a code cell. Outputs without a text
/// representation are skipped.
fn render_outputs(outputs: &[Output]) -> String {
    let blocks: Vec<String> = outputs
        .iter()
        .filter_map(|output| {
            let Some(text) = output.display_text() else {
                log::debug!("Skipping {} output without text", output.output_type());
                return None;
            };
            let class = match output {
                Output::Stream { .. } => "output-stream",
                _ => "output-result",
            };
            Some(format!(r#"<pre class="{}">{}</pre>"#, class, escape_html(text)))
        })
        .collect();

    if blocks.is_empty() {
        return String::new();
    }
    format!(r#"<div class="cell-outputs">{}</div>"#, blocks.concat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MimeBundle, TEXT_PLAIN};
    use crate::traits::RenderError;
    use pretty_assertions::assert_eq;

    struct FailingConverter;

    impl MarkdownConverter for FailingConverter {
        fn to_html(&self, _markdown: &str) -> Result<String, RenderError> {
            Err(RenderError::ConversionFailed("boom".to_string()))
        }
    }

    #[test]
    fn test_render_code_cell() {
        let html = CellRenderer::new().render_cell(&Cell::code("print(1)"), None);
        assert_eq!(
            html,
            r#"<div class="notebook-cell"><div class="cell-content"><pre><code class="python">print(1)</code></pre></div></div>"#
        );
    }

    #[test]
    fn test_status_is_only_a_class() {
        let renderer = CellRenderer::new();
        let cell = Cell::markdown("# Title");
        let plain = renderer.render_cell(&cell, None);
        let added = renderer.render_cell(&cell, Some(DiffStatus::Added));

        assert_eq!(
            added,
            plain.replacen("notebook-cell", "notebook-cell diff-added", 1)
        );
    }

    #[test]
    fn test_render_markdown_cell() {
        let html = CellRenderer::new().render_cell(&Cell::markdown("**bold**"), None);
        assert_eq!(
            html,
            "<div class=\"notebook-cell\"><div class=\"cell-content\"><p><strong>bold</strong></p>\n</div></div>"
        );
    }

    #[test]
    fn test_raw_cell_goes_through_markdown() {
        let html = CellRenderer::new().render_cell(&Cell::raw("*x*"), None);
        assert!(html.contains("<em>x</em>"));
    }

    #[test]
    fn test_markdown_failure_falls_back_to_pre() {
        let renderer = CellRenderer::new().with_markdown_converter(FailingConverter);
        let html = renderer.render_cell(&Cell::markdown("a <b> & c"), None);
        assert!(html.contains("<pre>a &lt;b&gt; &amp; c</pre>"));
    }

    #[test]
    fn test_oversized_markdown_falls_back_to_pre() {
        let renderer = CellRenderer::new()
            .with_markdown_converter(CommonMarkConverter::new().with_max_bytes(3));
        let html = renderer.render_cell(&Cell::markdown("# long"), None);
        assert!(html.contains("<pre># long</pre>"));
    }

    #[test]
    fn test_render_outputs() {
        let mut image = MimeBundle::new();
        image.insert("image/png".to_string(), "abc".to_string());
        let mut display = MimeBundle::new();
        display.insert(TEXT_PLAIN.to_string(), "<Figure>".to_string());

        let cell = Cell::code("x").with_outputs(
            Some(2),
            vec![
                Output::stream("1 < 2\n"),
                Output::execute_result("'x'"),
                Output::DisplayData { data: image },
                Output::DisplayData { data: display },
                Output::Unsupported {
                    output_type: "error".to_string(),
                },
            ],
        );

        let html = CellRenderer::new().render_cell(&cell, None);
        assert!(html.contains(
            r#"<div class="cell-outputs"><pre class="output-stream">1 &lt; 2
</pre><pre class="output-result">&#39;x&#39;</pre><pre class="output-result">&lt;Figure&gt;</pre></div>"#
        ));
        assert!(!html.contains("abc"));
    }

    #[test]
    fn test_no_outputs_block_without_text() {
        let cell = Cell::code("x").with_outputs(
            None,
            vec![Output::Unsupported {
                output_type: "error".to_string(),
            }],
        );
        let html = CellRenderer::new().render_cell(&cell, None);
        assert!(!html.contains("cell-outputs"));
    }

    #[test]
    fn test_numbered_cell() {
        let html = CellRenderer::new().render_numbered_cell(&Cell::code("x"), 3);
        assert!(html.starts_with(
            r#"<div class="notebook-cell"><div class="cell-number">[3]:</div><div class="cell-content">"#
        ));
    }

    #[test]
    fn test_code_language_is_escaped() {
        let renderer = CellRenderer::new().with_code_language("py\"><script>");
        let html = renderer.render_cell(&Cell::code("x"), None);
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"class="py&quot;&gt;&lt;script&gt;""#));
    }

    #[test]
    fn test_render_source_file() {
        let html = CellRenderer::new().render_source_file("a = '<'\n", "python");
        assert_eq!(
            html,
            "<div class=\"source-file\"><pre><code class=\"python\">a = &#39;&lt;&#39;\n</code></pre></div>"
        );
    }
}
