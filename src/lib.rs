//! # orquesta-editor
//!
//! Core of a browser editor for YAML workflow definitions with a live
//! preview pane.
//!
//! ## Overview
//!
//! The editor view keeps a single piece of state, the workflow text. Edits
//! reach that state only through a debounce: a change is delivered after the
//! user has stopped typing for 750 ms, and the delivered text replaces the
//! previous one wholesale. The text is never parsed or validated here; the
//! preview receives it as-is. The editor itself shows the live text with YAML
//! syntax highlighting.
//!
//! This crate is target-independent. The `wasm-ui` crate renders it with Yew.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use orquesta_editor::EditorSession;
//!
//! let mut session = EditorSession::default();
//! session.keystroke("v", Duration::from_millis(0));
//! session.keystroke("ve", Duration::from_millis(100));
//!
//! // Still inside the quiet period.
//! assert_eq!(session.tick(Duration::from_millis(500)), None);
//!
//! assert_eq!(session.tick(Duration::from_millis(850)), Some("ve"));
//! assert_eq!(session.preview_source(), "ve");
//! ```

pub mod config;
pub mod debounce;
pub mod document;
pub mod error;
pub mod highlight;
pub mod indent;
pub mod session;

pub use config::{
    DEBOUNCE_MS, DEFAULT_EDITOR_ID, EDITOR_ID_ATTRIBUTE, EditorSettings, GRID_COLUMNS,
    MountConfig, PaneLayout,
};
pub use debounce::Debouncer;
pub use document::YamlDocument;
pub use error::ConfigError;
pub use highlight::{HighlightError, Highlighter, StyledSpan};
pub use indent::{Edit, insert_soft_tab};
pub use session::EditorSession;
