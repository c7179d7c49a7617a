//! Logical Line Index
//!
//! Provides line access for the in-memory [`Document`](crate::Document) host using a Rope.

use ropey::Rope;

/// Logical line index - implemented using Rope data structure
///
/// Rope provides O(log N) line access, suitable for large file editing
#[derive(Debug, Clone)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Build line index from text
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get total line count
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get complete text
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }

    /// Get text of the specified line (excluding the line ending)
    pub fn get_line_text(&self, line_number: usize) -> Option<String> {
        if line_number >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line_number).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }

        Some(text)
    }

    /// Get the length of the specified line in characters (excluding the line ending)
    pub fn line_len_chars(&self, line_number: usize) -> Option<usize> {
        if line_number >= self.rope.len_lines() {
            return None;
        }

        let line = self.rope.line(line_number);
        let mut len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
        }
        if len > 0 && line.char(len - 1) == '\r' {
            len -= 1;
        }
        Some(len)
    }
}
