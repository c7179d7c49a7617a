//! Cross-caret consistency check for a trigger match.

use crate::commands::Selection;
use crate::host::LineSource;
use crate::text::char_at;

/// Whether every caret has `trigger` at `caret.end.column - cursor_offset` on its own line.
///
/// A column that would fall before the start of the line, or past its end, is a mismatch.
pub fn all_consistent<L: LineSource + ?Sized>(
    lines: &L,
    carets: &[Selection],
    trigger: char,
    cursor_offset: isize,
) -> bool {
    carets.iter().all(|caret| {
        let Some(column) = caret.end.column.checked_add_signed(-cursor_offset) else {
            return false;
        };
        lines
            .line_text(caret.end.line)
            .and_then(|text| char_at(&text, column))
            == Some(trigger)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn caret(line: usize, column: usize) -> Selection {
        Selection::caret(Position::new(line, column))
    }

    #[test]
    fn test_all_carets_agree() {
        let lines = ["foo(bar)", "baz(qux)", "a(b)"];
        let carets = [caret(0, 4), caret(1, 4), caret(2, 2)];

        assert!(all_consistent(&lines[..], &carets, '(', 1));
    }

    #[test]
    fn test_one_caret_disagrees() {
        let lines = ["foo(bar)", "bazqux"];
        let carets = [caret(0, 4), caret(1, 4)];

        assert!(!all_consistent(&lines[..], &carets, '(', 1));
    }

    #[test]
    fn test_negative_offset_reads_after_caret() {
        let lines = ["foo (bar)", "x (y)"];
        let carets = [caret(0, 3), caret(1, 1)];

        assert!(all_consistent(&lines[..], &carets, '(', -1));
    }

    #[test]
    fn test_column_before_line_start_is_mismatch() {
        let lines = ["(x"];
        let carets = [caret(0, 0)];

        assert!(!all_consistent(&lines[..], &carets, '(', 1));
    }

    #[test]
    fn test_column_past_line_end_is_mismatch() {
        let lines = ["ab"];
        let carets = [caret(0, 2)];

        assert!(!all_consistent(&lines[..], &carets, ',', 0));
    }

    #[test]
    fn test_missing_line_is_mismatch() {
        let lines = ["a,"];
        let carets = [caret(0, 2), caret(3, 2)];

        assert!(!all_consistent(&lines[..], &carets, ',', 1));
    }
}
