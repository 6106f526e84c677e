//! Rendering configuration
//!
//! Configuration loaded from a `.nbdiff.toml` file.

use anyhow::{Context, Result};
use notebook_diff::compose::{DEFAULT_REFERENCE_TITLE, DEFAULT_SUBMISSION_TITLE};
use notebook_diff::highlight::DEFAULT_THEME;
use notebook_diff::render::DEFAULT_CODE_LANGUAGE;
use notebook_diff::traits::DEFAULT_MAX_MARKDOWN_BYTES;
use notebook_diff::{
    CellRenderer, CommonMarkConverter, PlainHighlighter, SyntectHighlighter, ViewOptions,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where code cells get their syntax highlighting
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HighlighterKind {
    /// Escape only; the page highlights `<code class="python">` blocks itself
    #[default]
    Plain,
    /// Highlight into classed spans with syntect
    Syntect,
}

/// Rendering configuration loaded from .nbdiff.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Highlighter for code cells
    #[serde(default)]
    pub highlighter: HighlighterKind,

    /// syntect theme used for the stylesheet (syntect highlighter only)
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Language token for code cells
    #[serde(default = "default_code_language")]
    pub code_language: String,

    /// Markdown sources above this size are shown as plain text
    #[serde(default = "default_max_markdown_bytes")]
    pub max_markdown_bytes: usize,

    /// Prefix cells with `[n]:` in the single-notebook view
    #[serde(default = "default_true")]
    pub show_cell_numbers: bool,

    /// Show column titles above comparisons
    #[serde(default = "default_true")]
    pub show_comparison_header: bool,

    /// Title of the reference column
    #[serde(default = "default_reference_title")]
    pub reference_title: String,

    /// Title of the submission column
    #[serde(default = "default_submission_title")]
    pub submission_title: String,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_code_language() -> String {
    DEFAULT_CODE_LANGUAGE.to_string()
}

fn default_max_markdown_bytes() -> usize {
    DEFAULT_MAX_MARKDOWN_BYTES
}

fn default_true() -> bool {
    true
}

fn default_reference_title() -> String {
    DEFAULT_REFERENCE_TITLE.to_string()
}

fn default_submission_title() -> String {
    DEFAULT_SUBMISSION_TITLE.to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            highlighter: HighlighterKind::default(),
            theme: default_theme(),
            code_language: default_code_language(),
            max_markdown_bytes: default_max_markdown_bytes(),
            show_cell_numbers: default_true(),
            show_comparison_header: default_true(),
            reference_title: default_reference_title(),
            submission_title: default_submission_title(),
        }
    }
}

impl RenderConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded render config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default render config");
        Self::default()
    }

    /// Load config from an explicit path; unlike [`RenderConfig::load`],
    /// a missing or invalid file is an error
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = crate::load_config_file_from(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Build a cell renderer matching this configuration
    pub fn renderer(&self) -> CellRenderer {
        let markdown = CommonMarkConverter::new().with_max_bytes(self.max_markdown_bytes);
        let renderer = CellRenderer::new()
            .with_markdown_converter(markdown)
            .with_code_language(self.code_language.clone());

        match self.highlighter {
            HighlighterKind::Plain => renderer.with_highlighter(PlainHighlighter),
            HighlighterKind::Syntect => {
                renderer.with_highlighter(SyntectHighlighter::with_theme_name(&self.theme))
            }
        }
    }

    /// View options matching this configuration
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions::default()
            .with_titles(self.reference_title.clone(), self.submission_title.clone())
            .with_comparison_header(self.show_comparison_header)
            .with_cell_numbers(self.show_cell_numbers)
    }
}
