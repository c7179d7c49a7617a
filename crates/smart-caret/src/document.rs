//! In-memory Host
//!
//! [`Document`] is a complete [`CaretHost`]: rope-backed lines, a selection set, editor options
//! and change notifications. Frontends without their own editor model can use it directly, and
//! tests use it as the live editor.
//!
//! # Example
//!
//! ```rust
//! use smart_caret::{Document, Position};
//!
//! let mut document = Document::new("let a = 1;\nlet bb = 2;");
//! document.subscribe(|change| {
//!     println!("carets {} -> {}: {} carets", change.old_version, change.new_version, change.caret_count);
//! });
//!
//! document.set_carets([Position::new(0, 6), Position::new(1, 99)]).unwrap();
//! // Columns are clamped to the line length.
//! assert_eq!(document.carets(), vec![Position::new(0, 6), Position::new(1, 11)]);
//! assert_eq!(document.version(), 1);
//! ```

use crate::commands::{CommandError, Position, Selection};
use crate::config::EditorOptions;
use crate::host::{CaretHost, LineSource};
use crate::line_index::LineIndex;
use crate::selection_set::selection_direction;
use std::borrow::Cow;

/// Notification sent after the selection set was replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// Version before the change
    pub old_version: u64,
    /// Version after the change
    pub new_version: u64,
    /// Number of selections after the change
    pub caret_count: usize,
}

/// Selection change callback function type
pub type SelectionChangeCallback = Box<dyn FnMut(&SelectionChange) + Send>;

/// Rope-backed document with a multi-caret selection set.
pub struct Document {
    line_index: LineIndex,
    selections: Vec<Selection>,
    options: EditorOptions,
    version: u64,
    callbacks: Vec<SelectionChangeCallback>,
}

impl Document {
    /// Create a document with default options and a single caret at the start.
    pub fn new(text: &str) -> Self {
        Self::with_options(text, EditorOptions::default())
    }

    /// Create a document with explicit options.
    pub fn with_options(text: &str, options: EditorOptions) -> Self {
        Self {
            line_index: LineIndex::from_text(text),
            selections: vec![Selection::caret(Position::new(0, 0))],
            options,
            version: 0,
            callbacks: Vec::new(),
        }
    }

    /// Get complete text
    pub fn get_text(&self) -> String {
        self.line_index.get_text()
    }

    /// Editor options in effect.
    pub fn options(&self) -> EditorOptions {
        self.options
    }

    /// Replace the editor options. Takes effect on the next command.
    pub fn set_options(&mut self, options: EditorOptions) {
        self.options = options;
    }

    /// All selections, in set order.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Active positions of all selections, in set order.
    pub fn carets(&self) -> Vec<Position> {
        self.selections.iter().map(|sel| sel.end).collect()
    }

    /// Replace the selection set.
    ///
    /// Lines must exist; columns are clamped to the line length and directions recomputed.
    /// Duplicates are kept and the order is preserved.
    pub fn set_selections(&mut self, selections: Vec<Selection>) -> Result<(), CommandError> {
        if selections.is_empty() {
            return Err(CommandError::EmptySelections);
        }

        let line_count = self.line_index.line_count();
        if let Some(sel) = selections
            .iter()
            .find(|sel| sel.start.line >= line_count || sel.end.line >= line_count)
        {
            return Err(CommandError::InvalidPosition {
                line: sel.start.line.max(sel.end.line),
                column: sel.start.column.max(sel.end.column),
            });
        }

        let selections = selections
            .into_iter()
            .map(|sel| {
                let start = self.clamp_position(sel.start);
                let end = self.clamp_position(sel.end);
                Selection {
                    start,
                    end,
                    direction: selection_direction(start, end),
                }
            })
            .collect();

        self.replace(selections);
        Ok(())
    }

    /// Replace the selection set with carets at `positions`.
    pub fn set_carets(
        &mut self,
        positions: impl IntoIterator<Item = Position>,
    ) -> Result<(), CommandError> {
        self.set_selections(positions.into_iter().map(Selection::caret).collect())
    }

    /// Selection version, incremented on every replacement.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Check if selections have changed since a version
    pub fn has_changed_since(&self, version: u64) -> bool {
        self.version > version
    }

    /// Subscribe to selection replacements.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&SelectionChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    fn clamp_position(&self, pos: Position) -> Position {
        let line_len = self.line_index.line_len_chars(pos.line).unwrap_or(0);
        Position::new(pos.line, pos.column.min(line_len))
    }

    fn replace(&mut self, selections: Vec<Selection>) {
        let old_version = self.version;
        self.version += 1;
        self.selections = selections;

        let change = SelectionChange {
            old_version,
            new_version: self.version,
            caret_count: self.selections.len(),
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }
}

impl LineSource for Document {
    fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        self.line_index.get_line_text(line).map(Cow::Owned)
    }
}

impl CaretHost for Document {
    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn replace_selections(&mut self, selections: Vec<Selection>) {
        self.replace(selections);
    }

    fn tab_width(&self) -> usize {
        self.options.tab_width
    }
}
