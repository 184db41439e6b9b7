//! Editor settings, mount configuration and pane layout.
//!
//! The editor widget runs with a fixed configuration ([`EditorSettings`]).
//! The only page-supplied input is the set of `data-*` attributes on the
//! mount element, which is turned into a typed [`MountConfig`].

use std::time::Duration;

use crate::error::ConfigError;

/// Quiet period after the last keystroke before a change is delivered.
pub const DEBOUNCE_MS: u64 = 750;

/// Number of columns in the layout grid.
pub const GRID_COLUMNS: u8 = 12;

/// Attribute naming the editor widget.
pub const EDITOR_ID_ATTRIBUTE: &str = "data-editor-id";

/// Default editor widget id/name.
pub const DEFAULT_EDITOR_ID: &str = "uid";

/// Fixed configuration of the embedded editor widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorSettings {
    /// Syntax mode.
    pub mode: &'static str,
    /// Visual theme.
    pub theme: &'static str,
    /// Spaces inserted per tab stop.
    pub tab_size: usize,
    /// Whether to draw the print margin guide.
    pub show_print_margin: bool,
    /// Text shown while the editor is empty.
    pub placeholder: &'static str,
    /// CSS height of the widget.
    pub height: &'static str,
    /// CSS width of the widget.
    pub width: &'static str,
    /// Debounce quiet period for change delivery.
    pub debounce: Duration,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            mode: "yaml",
            theme: "github",
            tab_size: 2,
            show_print_margin: false,
            placeholder: "Edit Orquesta workflow here",
            height: "1000px",
            width: "100%",
            debounce: Duration::from_millis(DEBOUNCE_MS),
        }
    }
}

/// Split of the grid between editor and preview panes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaneLayout {
    /// Columns taken by the editor pane.
    pub editor_columns: u8,
}

impl Default for PaneLayout {
    fn default() -> Self {
        Self { editor_columns: 4 }
    }
}

impl PaneLayout {
    /// Columns left for the preview pane.
    pub fn preview_columns(&self) -> u8 {
        GRID_COLUMNS.saturating_sub(self.editor_columns)
    }

    pub fn editor_class(&self) -> String {
        format!("col-{}", self.editor_columns)
    }

    pub fn preview_class(&self) -> String {
        format!("col-{}", self.preview_columns())
    }
}

/// Configuration read from the mount element's `data-*` attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountConfig {
    /// Id and name given to the editor widget.
    pub editor_id: String,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            editor_id: DEFAULT_EDITOR_ID.to_string(),
        }
    }
}

impl MountConfig {
    /// Build a config from `(attribute, value)` pairs.
    ///
    /// Attributes not starting with `data-` are skipped silently; unknown
    /// `data-*` attributes are logged and ignored. A recognized attribute
    /// with an invalid value is an error.
    pub fn from_attributes<I, K, V>(attributes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();

        for (name, value) in attributes {
            let name = name.as_ref();
            let value = value.as_ref();
            if !name.starts_with("data-") {
                continue;
            }

            match name {
                EDITOR_ID_ATTRIBUTE => {
                    config.editor_id = parse_editor_id(value)?;
                }
                _ => log::warn!("ignoring unknown mount attribute `{}`", name),
            }
        }

        Ok(config)
    }
}

fn parse_editor_id(value: &str) -> Result<String, ConfigError> {
    let invalid = |reason| ConfigError::InvalidAttribute {
        attribute: EDITOR_ID_ATTRIBUTE.to_string(),
        value: value.to_string(),
        reason,
    };

    if value.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid("only ASCII letters, digits, '-' and '_' are allowed"));
    }
    Ok(value.to_string())
}
