//! Editor session: the state behind the editor view.
//!
//! Ties the live editor buffer, the debouncer and the committed document
//! together. Only a debounced delivery changes the document; what the
//! preview sees is always the committed source.

use std::time::Duration;

use crate::config::EditorSettings;
use crate::debounce::Debouncer;
use crate::document::YamlDocument;

#[derive(Debug)]
pub struct EditorSession {
    settings: EditorSettings,
    buffer: String,
    debouncer: Debouncer<String>,
    document: YamlDocument,
    torn_down: bool,
}

impl EditorSession {
    pub fn new(settings: EditorSettings) -> Self {
        let debouncer = Debouncer::new(settings.debounce);
        Self {
            settings,
            buffer: String::new(),
            debouncer,
            document: YamlDocument::new(),
            torn_down: false,
        }
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Text currently shown in the editor, committed or not.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn document(&self) -> &YamlDocument {
        &self.document
    }

    /// Text handed to the preview pane.
    pub fn preview_source(&self) -> &str {
        self.document.source()
    }

    pub fn placeholder_visible(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether an edit is waiting for its quiet period.
    pub fn has_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Time until the pending edit is due, zero once due.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Record a keystroke leaving the editor with `text`. Ignored after
    /// [`teardown`](Self::teardown).
    pub fn keystroke(&mut self, text: impl Into<String>, now: Duration) {
        if self.torn_down {
            return;
        }
        let text = text.into();
        self.buffer.clone_from(&text);
        self.debouncer.push(text, now);
    }

    /// Deliver the pending edit if it is due. Returns the committed text.
    pub fn tick(&mut self, now: Duration) -> Option<&str> {
        let text = self.debouncer.poll(now)?;
        self.document.commit(text);
        Some(self.document.source())
    }

    /// Stop the session, discarding any pending edit.
    pub fn teardown(&mut self) {
        if self.debouncer.cancel().is_some() {
            log::debug!("discarded pending edit on teardown");
        }
        self.torn_down = true;
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}
