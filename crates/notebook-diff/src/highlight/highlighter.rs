//! Server-side syntax highlighter using syntect.

use crate::traits::{CodeHighlighter, HighlightError};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Theme used when none is configured or the configured one is unknown.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Prefix on every emitted class so highlighting never clashes with page CSS.
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Highlights code cells into classed `<span>` markup.
///
/// The colors live in the stylesheet returned by
/// [`CodeHighlighter::stylesheet`], generated from the selected theme.
pub struct SyntectHighlighter {
    /// Syntax definitions.
    syntax_set: SyntaxSet,
    /// Theme the stylesheet is generated from.
    theme: Theme,
    theme_name: String,
}

impl std::fmt::Debug for SyntectHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntectHighlighter")
            .field("theme", &self.theme_name)
            .field("syntaxes", &self.syntax_set.syntaxes().len())
            .finish()
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntectHighlighter {
    /// Create a highlighter with the default theme.
    pub fn new() -> Self {
        Self::with_theme_name(DEFAULT_THEME)
    }

    /// Create a highlighter with a specific theme name.
    ///
    /// Unknown names fall back to [`DEFAULT_THEME`].
    pub fn with_theme_name(theme_name: &str) -> Self {
        let mut theme_set = ThemeSet::load_defaults();
        let (theme, name) = match theme_set.themes.remove(theme_name) {
            Some(theme) => (theme, theme_name),
            None => {
                log::warn!(
                    "Unknown highlight theme {:?}, using {} (available: {})",
                    theme_name,
                    DEFAULT_THEME,
                    theme_names(&theme_set).join(", ")
                );
                (
                    theme_set.themes.remove(DEFAULT_THEME).unwrap_or_default(),
                    DEFAULT_THEME,
                )
            }
        };

        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            theme_name: name.to_string(),
        }
    }

    /// Name of the active theme.
    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Look up a syntax by token (`python`, `py`, `rust`, ...), falling back
    /// to plain text.
    fn syntax_for(&self, language: &str) -> &SyntaxReference {
        self.syntax_set
            .find_syntax_by_token(language)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }
}

/// Names of the themes bundled with syntect, sorted.
fn theme_names(theme_set: &ThemeSet) -> Vec<&str> {
    theme_set.themes.keys().map(String::as_str).collect()
}

impl CodeHighlighter for SyntectHighlighter {
    fn highlight(&self, source: &str, language: &str) -> Result<String, HighlightError> {
        let syntax = self.syntax_for(language);
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);

        for line in LinesWithEndings::from(source) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| HighlightError::Failed(e.to_string()))?;
        }

        Ok(generator.finalize())
    }

    fn stylesheet(&self) -> Option<String> {
        match css_for_theme_with_class_style(&self.theme, CLASS_STYLE) {
            Ok(css) => Some(css),
            Err(e) => {
                log::warn!("Could not build stylesheet for {}: {}", self.theme_name, e);
                None
            }
        }
    }
}
