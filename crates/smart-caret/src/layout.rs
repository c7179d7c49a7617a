//! Visual Column Conversion
//!
//! Converts between raw character columns and visual cell columns within a single line.
//! Character widths follow UAX #11, grapheme clusters occupy the width of their first scalar,
//! and `'\t'` advances to the next tab stop.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::text::byte_offset_for_column;

/// Default tab width (in cells) used when a caller does not specify a tab width.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Calculate visual width of a character (based on UAX #11)
///
/// Return value:
/// - 1: Narrow character (ASCII, etc.)
/// - 2: Wide character (CJK, fullwidth, etc.)
/// - 0: Zero-width character (combining characters, etc.)
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(1)
}

/// Calculate visual width (in cells) for a character at a specific cell offset within the line.
///
/// - For most characters, width follows UAX #11 via [`char_width`].
/// - For `'\t'`, width advances to the next tab stop based on `tab_width`.
pub fn cell_width_at(ch: char, cell_offset_in_line: usize, tab_width: usize) -> usize {
    if ch == '\t' {
        let tab_width = tab_width.max(1);
        let rem = cell_offset_in_line % tab_width;
        tab_width - rem
    } else {
        char_width(ch)
    }
}

// A caret never lands inside a cluster, so every cluster takes at least one cell.
fn grapheme_width_at(grapheme: &str, cell_offset_in_line: usize, tab_width: usize) -> usize {
    grapheme
        .chars()
        .next()
        .map_or(0, |ch| cell_width_at(ch, cell_offset_in_line, tab_width).max(1))
}

/// Calculate the visual cell offset from the start of the line to the given character column.
///
/// - `column` is counted in `char` (not bytes) and is clamped to the line length.
/// - `'\t'` is expanded using `tab_width` and the current cell offset.
pub fn visual_x_for_column(line: &str, column: usize, tab_width: usize) -> usize {
    let prefix = &line[..byte_offset_for_column(line, column)];
    let mut x = 0usize;
    for grapheme in prefix.graphemes(true) {
        x = x.saturating_add(grapheme_width_at(grapheme, x, tab_width));
    }
    x
}

/// Inverse of [`visual_x_for_column`]: the character column whose cell offset is closest to `x`.
///
/// When `x` falls inside a wide character or a tab, the nearer boundary wins and ties resolve to
/// the earlier one. Offsets beyond the end of the line map to the line length.
pub fn column_for_visual_x(line: &str, x: usize, tab_width: usize) -> usize {
    if x == 0 {
        return 0;
    }

    let mut before_x = 0usize;
    let mut before_column = 0usize;
    for grapheme in line.graphemes(true) {
        let after_x = before_x.saturating_add(grapheme_width_at(grapheme, before_x, tab_width));
        let after_column = before_column + grapheme.chars().count();
        if after_x >= x {
            return if after_x - x < x - before_x {
                after_column
            } else {
                before_column
            };
        }
        before_x = after_x;
        before_column = after_column;
    }
    before_column
}
