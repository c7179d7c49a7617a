//! Host Capabilities
//!
//! The editor state the insertion algorithm reads and writes, expressed as traits so that any
//! editor (or an in-memory fake) can drive it.

use crate::commands::Selection;
use std::borrow::Cow;

/// Read access to the lines of a document.
pub trait LineSource {
    /// Number of logical lines.
    fn line_count(&self) -> usize;

    /// Text of logical line `line`, without its line ending. `None` when out of range.
    fn line_text(&self, line: usize) -> Option<Cow<'_, str>>;
}

/// A live editor: lines, carets and the active tab width.
pub trait CaretHost: LineSource {
    /// Current selections, in the host's own order.
    fn selections(&self) -> Vec<Selection>;

    /// Replace every selection. Hosts treat this as a signal to refresh their display.
    fn replace_selections(&mut self, selections: Vec<Selection>);

    /// Tab width (in cells) of the active editor configuration.
    fn tab_width(&self) -> usize;
}

impl<S: AsRef<str>> LineSource for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        self.get(line).map(|text| Cow::Borrowed(text.as_ref()))
    }
}

impl<S: AsRef<str>> LineSource for Vec<S> {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        self.as_slice().line_text(line)
    }
}

/// Text of `line`, or an empty line when the source has no such line.
pub(crate) fn line_or_empty<L: LineSource + ?Sized>(lines: &L, line: usize) -> Cow<'_, str> {
    lines.line_text(line).unwrap_or_default()
}
