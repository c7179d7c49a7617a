//! Screen-column alignment used when no trigger alignment applies.

use crate::layout::{column_for_visual_x, visual_x_for_column};

/// Column on `target_line` that sits at the same visual column as `anchor_column` on
/// `anchor_line`, with tabs expanded to `tab_width`.
///
/// Both conversions use raw zero-based columns, so a caret at the end of a line maps to the end
/// of a shorter target line.
pub fn fallback_column(
    anchor_line: &str,
    anchor_column: usize,
    target_line: &str,
    tab_width: usize,
) -> usize {
    let x = visual_x_for_column(anchor_line, anchor_column, tab_width);
    column_for_visual_x(target_line, x, tab_width)
}
