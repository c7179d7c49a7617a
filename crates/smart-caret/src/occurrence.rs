//! Occurrence correspondence between two lines.
//!
//! A caret next to the second `,` of one line belongs next to the second `,` of the next line,
//! wherever that comma happens to sit.

/// Number of `trigger` characters strictly before character column `column` of `line`.
pub fn occurrence_index(line: &str, trigger: char, column: usize) -> usize {
    line.chars()
        .take(column)
        .filter(|&ch| ch == trigger)
        .count()
}

/// Character column of the `index`-th (zero-based) `trigger` in `line`.
pub fn nth_occurrence(line: &str, trigger: char, index: usize) -> Option<usize> {
    line.chars()
        .enumerate()
        .filter(|&(_, ch)| ch == trigger)
        .nth(index)
        .map(|(column, _)| column)
}

/// Column in `target` of the occurrence of `trigger` that corresponds to the one at `occurrence`
/// in `source`, or `None` when `target` has too few occurrences.
pub fn locate(source: &str, target: &str, trigger: char, occurrence: usize) -> Option<usize> {
    nth_occurrence(target, trigger, occurrence_index(source, trigger, occurrence))
}
