//! Caret Insertion
//!
//! Chooses where a new caret goes on the line above or below the existing carets.
//!
//! # Overview
//!
//! The caret nearest the new line (the *anchor*) decides everything:
//!
//! 1. If a trigger character touches the anchor ([`match_trigger`]) and every caret has the same
//!    character at the same relative column ([`all_consistent`]), the new caret lands next to the
//!    corresponding occurrence of that character on the target line ([`locate`]).
//! 2. Otherwise the new caret is aligned by visual column with the caret at the *other* end of
//!    the set ([`fallback_column`]), so repeated insertions do not drift.
//!
//! # Example
//!
//! ```rust
//! use smart_caret::insert::{InsertDirection, plan_insertion};
//! use smart_caret::{Position, Selection};
//!
//! let lines = ["a, b, c", "d, e, f"];
//! let carets = [Selection::caret(Position::new(0, 4))];
//!
//! // After the second comma, not the first.
//! assert_eq!(
//!     plan_insertion(&lines[..], &carets, InsertDirection::Below, 4),
//!     Some(Position::new(1, 4))
//! );
//! ```

use crate::commands::{Position, Selection};
use crate::consistency::all_consistent;
use crate::fallback::fallback_column;
use crate::host::{LineSource, line_or_empty};
use crate::occurrence::locate;
use crate::selection_set::{anchor_and_reference, order_by_end_line};
use crate::text::char_len;
use crate::trigger::match_trigger;
use log::{debug, trace};

/// Which adjacent line receives the new caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertDirection {
    /// The line above the top-most caret.
    Above,
    /// The line below the bottom-most caret.
    Below,
}

impl InsertDirection {
    fn as_str(self) -> &'static str {
        match self {
            InsertDirection::Above => "above",
            InsertDirection::Below => "below",
        }
    }

    /// The line adjacent to `line` in this direction, if it exists in a document of `line_count`
    /// lines.
    pub fn target_line(self, line: usize, line_count: usize) -> Option<usize> {
        match self {
            InsertDirection::Above => line.checked_sub(1),
            InsertDirection::Below => line.checked_add(1).filter(|&next| next < line_count),
        }
    }
}

/// Position of the caret to add, or `None` when there is nothing to do (no carets, or no line in
/// that direction).
pub fn plan_insertion<L: LineSource + ?Sized>(
    lines: &L,
    carets: &[Selection],
    direction: InsertDirection,
    tab_width: usize,
) -> Option<Position> {
    let ordered = order_by_end_line(carets);
    let (anchor, reference) = anchor_and_reference(&ordered, direction)?;

    let Some(target_line) = direction.target_line(anchor.line, lines.line_count()) else {
        debug!(
            "no line {} line {}, caret set left unchanged",
            direction.as_str(),
            anchor.line
        );
        return None;
    };

    let anchor_text = line_or_empty(lines, anchor.line);
    let target_text = line_or_empty(lines, target_line);

    let column = match aligned_column(lines, &ordered, anchor, &anchor_text, &target_text) {
        Some(column) => {
            debug!("caret on line {target_line} aligned to trigger at column {column}");
            column
        }
        None => {
            let reference_text = line_or_empty(lines, reference.line);
            let column =
                fallback_column(&reference_text, reference.column, &target_text, tab_width);
            debug!(
                "caret on line {target_line} aligned by visual column with {}:{} at column {column}",
                reference.line, reference.column
            );
            column
        }
    };

    Some(Position::new(target_line, column))
}

// Trigger-based column on the target line, or `None` when the fallback must decide.
fn aligned_column<L: LineSource + ?Sized>(
    lines: &L,
    carets: &[Selection],
    anchor: Position,
    anchor_text: &str,
    target_text: &str,
) -> Option<usize> {
    let found = match_trigger(anchor_text, anchor.column)?;
    trace!("trigger match at {}:{}: {found:?}", anchor.line, anchor.column);

    if !all_consistent(lines, carets, found.trigger, found.cursor_offset) {
        debug!("trigger {:?} does not hold for every caret", found.trigger);
        return None;
    }

    let occurrence = locate(anchor_text, target_text, found.trigger, found.occurrence)?;
    // A caret before a trigger at column 0 has nowhere to go.
    let column = occurrence.checked_add_signed(found.cursor_offset)?;
    Some(column.min(char_len(target_text)))
}

/// The caret set after adding a caret at `position`: the existing carets ordered by line, then
/// the new caret.
pub fn apply_insertion(carets: &[Selection], position: Position) -> Vec<Selection> {
    let mut updated = order_by_end_line(carets);
    updated.push(Selection::caret(position));
    updated
}

/// Run a full insertion over `carets` and return the resulting caret set.
///
/// When nothing can be inserted the input is returned unchanged, in its original order.
pub fn insert_caret<L: LineSource + ?Sized>(
    lines: &L,
    carets: &[Selection],
    direction: InsertDirection,
    tab_width: usize,
) -> Vec<Selection> {
    match plan_insertion(lines, carets, direction, tab_width) {
        Some(position) => apply_insertion(carets, position),
        None => carets.to_vec(),
    }
}
