//! YAML syntax highlighting for the editor overlay.
//!
//! The editor's `mode` selects a syntect syntax and its `theme` a syntect
//! theme. Output is one list of styled spans per source line.

use std::sync::LazyLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, FontStyle, Style, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;
use thiserror::Error;

use crate::config::EditorSettings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("no syntax for editor mode `{0}`")]
    UnknownMode(String),
    #[error("no theme for editor theme `{0}`")]
    UnknownTheme(String),
    #[error(transparent)]
    Syntect(#[from] syntect::Error),
}

/// A run of text sharing one style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    /// Foreground as `#rrggbb`.
    pub color: String,
    pub bold: bool,
    pub italic: bool,
}

impl StyledSpan {
    fn new(style: Style, text: &str) -> Self {
        Self {
            text: text.to_string(),
            color: hex(style.foreground),
            bold: style.font_style.contains(FontStyle::BOLD),
            italic: style.font_style.contains(FontStyle::ITALIC),
        }
    }

    /// Inline CSS for this span.
    pub fn css(&self) -> String {
        let mut css = format!("color: {};", self.color);
        if self.bold {
            css.push_str(" font-weight: bold;");
        }
        if self.italic {
            css.push_str(" font-style: italic;");
        }
        css
    }
}

fn hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// syntect name of an editor theme. Unlisted names are used as-is.
fn theme_name(theme: &str) -> &str {
    match theme {
        "github" => "InspiredGitHub",
        other => other,
    }
}

/// Highlighter bound to one syntax and theme.
pub struct Highlighter {
    syntax: &'static SyntaxReference,
    theme: &'static Theme,
}

impl Highlighter {
    pub fn new(mode: &str, theme: &str) -> Result<Self, HighlightError> {
        let syntax = SYNTAX_SET
            .find_syntax_by_token(mode)
            .ok_or_else(|| HighlightError::UnknownMode(mode.to_string()))?;
        let theme = THEME_SET
            .themes
            .get(theme_name(theme))
            .ok_or_else(|| HighlightError::UnknownTheme(theme.to_string()))?;
        Ok(Self { syntax, theme })
    }

    pub fn for_settings(settings: &EditorSettings) -> Result<Self, HighlightError> {
        Self::new(settings.mode, settings.theme)
    }

    /// Theme background as `#rrggbb`, if the theme sets one.
    pub fn background(&self) -> Option<String> {
        self.theme.settings.background.map(hex)
    }

    /// Highlight `source`, one entry per line (line endings kept).
    pub fn highlight(&self, source: &str) -> Result<Vec<Vec<StyledSpan>>, HighlightError> {
        let mut highlighter = HighlightLines::new(self.syntax, self.theme);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(source) {
            let ranges = highlighter.highlight_line(line, &SYNTAX_SET)?;
            lines.push(
                ranges
                    .into_iter()
                    .map(|(style, text)| StyledSpan::new(style, text))
                    .collect(),
            );
        }
        Ok(lines)
    }
}
