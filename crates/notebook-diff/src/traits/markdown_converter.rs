//! Trait for converting markdown cell sources to HTML.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use thiserror::Error;

/// Default upper bound for markdown sources handed to the converter.
pub const DEFAULT_MAX_MARKDOWN_BYTES: usize = 1024 * 1024;

/// Errors that can occur when converting markdown.
///
/// The cell renderer never propagates these; it falls back to showing the
/// escaped source in a `<pre>` block.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The source exceeds the converter's size limit.
    #[error("Markdown source too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },

    /// The converter could not produce HTML.
    #[error("Markdown conversion failed: {0}")]
    ConversionFailed(String),
}

/// Converts markdown text into an HTML fragment.
///
/// Implementations must not let markup from the source reach the output
/// unescaped.
///
/// # Example
///
/// ```ignore
/// struct ShowdownBridge { /* ... */ }
///
/// impl MarkdownConverter for ShowdownBridge {
///     fn to_html(&self, markdown: &str) -> Result<String, RenderError> {
///         self.call_js(markdown).map_err(|e| RenderError::ConversionFailed(e.to_string()))
///     }
/// }
/// ```
pub trait MarkdownConverter: Send + Sync {
    fn to_html(&self, markdown: &str) -> Result<String, RenderError>;
}

/// CommonMark converter backed by `pulldown-cmark`.
///
/// Raw HTML blocks and inline HTML in the source are emitted as text, and
/// links or images with script-capable schemes are pointed at `#`.
#[derive(Debug, Clone)]
pub struct CommonMarkConverter {
    options: Options,
    max_bytes: usize,
}

impl Default for CommonMarkConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommonMarkConverter {
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
            max_bytes: DEFAULT_MAX_MARKDOWN_BYTES,
        }
    }

    /// Set the maximum accepted source size in bytes.
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

impl MarkdownConverter for CommonMarkConverter {
    fn to_html(&self, markdown: &str) -> Result<String, RenderError> {
        if markdown.len() > self.max_bytes {
            return Err(RenderError::TooLarge {
                size: markdown.len(),
                limit: self.max_bytes,
            });
        }

        let parser = Parser::new_ext(markdown, self.options).map(neutralize);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        Ok(html_output)
    }
}

/// Turn embedded HTML into text and defuse dangerous link targets.
fn neutralize(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let scheme: String = url
        .trim_start()
        .chars()
        .take_while(|c| *c != ':')
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    if url.contains(':') && matches!(scheme.as_str(), "javascript" | "vbscript" | "data") {
        log::debug!("Dropping {} link target from markdown", scheme);
        CowStr::Borrowed("#")
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_renders_common_markdown() {
        let html = CommonMarkConverter::new()
            .to_html("# Title\n\nSome *text* and `code`.")
            .unwrap();
        assert_eq!(
            html,
            "<h1>Title</h1>\n<p>Some <em>text</em> and <code>code</code>.</p>\n"
        );
    }

    #[test]
    fn test_tables_are_enabled() {
        let html = CommonMarkConverter::new()
            .to_html("| a | b |\n|---|---|\n| 1 | 2 |\n")
            .unwrap();
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_embedded_html_is_escaped() {
        let html = CommonMarkConverter::new()
            .to_html("<script>alert(1)</script>\n\nHello <b>world</b> & co")
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;world&lt;/b&gt; &amp; co"));
    }

    #[test]
    fn test_script_links_are_defused() {
        let html = CommonMarkConverter::new()
            .to_html("[click](javascript:alert(1)) [ok](https://example.org)")
            .unwrap();
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"<a href="#">click</a>"##));
        assert!(html.contains(r#"<a href="https://example.org">ok</a>"#));
    }

    #[test]
    fn test_size_limit() {
        let converter = CommonMarkConverter::new().with_max_bytes(4);
        let err = converter.to_html("# too long").unwrap_err();
        assert!(matches!(err, RenderError::TooLarge { size: 10, limit: 4 }));
        assert!(converter.to_html("ok").is_ok());
    }

    #[test]
    fn test_safe_url() {
        assert_eq!(&*safe_url(CowStr::Borrowed("JavaScript:x")), "#");
        assert_eq!(&*safe_url(CowStr::Borrowed(" data:text/html,x")), "#");
        assert_eq!(&*safe_url(CowStr::Borrowed("https://a")), "https://a");
        assert_eq!(&*safe_url(CowStr::Borrowed("notes.md")), "notes.md");
    }
}
