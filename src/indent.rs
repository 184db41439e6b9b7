//! Soft-tab insertion for the editor textarea.
//!
//! Caret and selection offsets are UTF-16 code unit indices, which is what
//! `selectionStart`/`selectionEnd` report in the browser.

/// Result of an edit: new text and the caret position after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub text: String,
    /// Caret position in UTF-16 code units.
    pub caret: u32,
}

/// Replace the selection `start..end` with `tab_size` spaces.
///
/// Offsets past the end of `text` are clamped and reversed offsets are
/// swapped.
pub fn insert_soft_tab(text: &str, start: u32, end: u32, tab_size: usize) -> Edit {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let head = byte_offset(text, start);
    let tail = byte_offset(text, end);
    let spaces = " ".repeat(tab_size);

    let mut out = String::with_capacity(text.len() + tab_size);
    out.push_str(&text[..head]);
    out.push_str(&spaces);
    out.push_str(&text[tail..]);

    let inserted_at = text[..head].encode_utf16().count() as u32;
    Edit {
        text: out,
        caret: inserted_at + tab_size as u32,
    }
}

/// Convert a UTF-16 offset into a byte offset on a char boundary.
fn byte_offset(text: &str, utf16: u32) -> usize {
    let mut units = 0u32;
    for (idx, ch) in text.char_indices() {
        if units >= utf16 {
            return idx;
        }
        units += ch.len_utf16() as u32;
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_caret() {
        let edit = insert_soft_tab("tasks:\ntask1:", 7, 7, 2);
        assert_eq!(edit.text, "tasks:\n  task1:");
        assert_eq!(edit.caret, 9);
    }

    #[test]
    fn test_replaces_selection() {
        let edit = insert_soft_tab("abXYcd", 2, 4, 2);
        assert_eq!(edit.text, "ab  cd");
        assert_eq!(edit.caret, 4);
    }

    #[test]
    fn test_reversed_and_clamped_offsets() {
        let edit = insert_soft_tab("abc", 99, 1, 2);
        assert_eq!(edit.text, "a  ");
        assert_eq!(edit.caret, 3);
    }

    #[test]
    fn test_utf16_offsets() {
        // "é" is one UTF-16 unit, "😀" is two.
        let edit = insert_soft_tab("é😀x", 3, 3, 2);
        assert_eq!(edit.text, "é😀  x");
        assert_eq!(edit.caret, 5);
    }

    #[test]
    fn test_empty_text() {
        let edit = insert_soft_tab("", 0, 0, 2);
        assert_eq!(edit.text, "  ");
        assert_eq!(edit.caret, 2);
    }
}
