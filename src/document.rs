//! The workflow document held by the editor view.

/// Current YAML text of the workflow being edited.
///
/// The text is only ever replaced as a whole. It is never parsed here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct YamlDocument {
    source: String,
    revision: u64,
}

impl YamlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of commits delivered so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the document text.
    pub fn commit(&mut self, source: String) {
        self.revision += 1;
        log::debug!(
            "document revision {} committed ({} bytes)",
            self.revision,
            source.len()
        );
        self.source = source;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let doc = YamlDocument::new();
        assert_eq!(doc.source(), "");
        assert_eq!(doc.revision(), 0);
    }

    #[test]
    fn test_commit_replaces_wholesale() {
        let mut doc = YamlDocument::new();
        doc.commit("version: 1.0\n".to_string());
        doc.commit("tasks:\n".to_string());
        assert_eq!(doc.source(), "tasks:\n");
        assert_eq!(doc.revision(), 2);
    }

    #[test]
    fn test_accepts_malformed_yaml() {
        let mut doc = YamlDocument::new();
        doc.commit(": : [unclosed\n\t- {".to_string());
        assert_eq!(doc.source(), ": : [unclosed\n\t- {");
    }
}
