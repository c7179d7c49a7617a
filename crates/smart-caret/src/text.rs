/// Byte offset of character `column` in `line`, or `line.len()` when `column` is past the end.
pub(crate) fn byte_offset_for_column(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}

pub(crate) fn char_at(line: &str, column: usize) -> Option<char> {
    line.chars().nth(column)
}

pub(crate) fn char_len(line: &str) -> usize {
    line.chars().count()
}
