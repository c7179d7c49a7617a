//! Trigger Adjacency Matching
//!
//! Decides whether one of the [`TRIGGER_CHARS`] touches a caret column, allowing at most one
//! whitespace character on either side of the trigger.
//!
//! # Example
//!
//! ```rust
//! use smart_caret::trigger::{TriggerMatch, match_trigger};
//!
//! // Caret right after the '(' of "foo(".
//! assert_eq!(
//!     match_trigger("foo(bar)", 4),
//!     Some(TriggerMatch { trigger: '(', occurrence: 3, cursor_offset: 1 })
//! );
//! assert_eq!(match_trigger("foobar", 3), None);
//! ```

use crate::text::byte_offset_for_column;
use regex::Regex;
use std::sync::LazyLock;

/// Characters that anchor caret alignment.
pub const TRIGGER_CHARS: [char; 17] = [
    '"', '\'', '=', ':', ',', ';', '.', '(', ')', '{', '}', '[', ']', '<', '>', '|', '\t',
];

static TRIGGER_BEFORE_CARET: LazyLock<Regex> =
    LazyLock::new(|| compile_trigger_pattern(&format!(r"\s?({})\s?$", trigger_alternation())));

static TRIGGER_AFTER_CARET: LazyLock<Regex> =
    LazyLock::new(|| compile_trigger_pattern(&format!(r"^\s?({})\s?", trigger_alternation())));

fn trigger_alternation() -> String {
    TRIGGER_CHARS
        .iter()
        .map(|ch| regex::escape(ch.encode_utf8(&mut [0; 4])))
        .collect::<Vec<_>>()
        .join("|")
}

fn compile_trigger_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).expect("trigger pattern must compile")
}

/// A trigger character found next to a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerMatch {
    /// The trigger character.
    pub trigger: char,
    /// Character column of the trigger in the line.
    pub occurrence: usize,
    /// Caret column minus `occurrence`: `1`/`2` when the trigger precedes the caret (directly or
    /// across one whitespace), `0`/`-1` when it follows.
    pub cursor_offset: isize,
}

impl TriggerMatch {
    fn at(column: usize, trigger: char, cursor_offset: isize) -> Option<Self> {
        Some(Self {
            trigger,
            occurrence: column.checked_add_signed(-cursor_offset)?,
            cursor_offset,
        })
    }
}

/// Find the trigger character touching `column` in `line`.
///
/// The text before the caret is tried first; only if it ends without a trigger is the text after
/// the caret examined. Only the trigger immediately touching the caret matters.
pub fn match_trigger(line: &str, column: usize) -> Option<TriggerMatch> {
    let (head, tail) = line.split_at(byte_offset_for_column(line, column));

    if let Some((span, trigger)) = capture_trigger(&TRIGGER_BEFORE_CARET, head) {
        let cursor_offset = if span.ends_with(trigger) { 1 } else { 2 };
        return TriggerMatch::at(column, trigger, cursor_offset);
    }

    if let Some((span, trigger)) = capture_trigger(&TRIGGER_AFTER_CARET, tail) {
        let cursor_offset = if span.starts_with(trigger) { 0 } else { -1 };
        return TriggerMatch::at(column, trigger, cursor_offset);
    }

    None
}

fn capture_trigger<'h>(pattern: &Regex, haystack: &'h str) -> Option<(&'h str, char)> {
    let caps = pattern.captures(haystack)?;
    let span = caps.get(0)?.as_str();
    let trigger = caps.get(1)?.as_str().chars().next()?;
    Some((span, trigger))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(trigger: char, occurrence: usize, cursor_offset: isize) -> Option<TriggerMatch> {
        Some(TriggerMatch {
            trigger,
            occurrence,
            cursor_offset,
        })
    }

    #[test]
    fn test_trigger_patterns_compile() {
        assert!(TRIGGER_BEFORE_CARET.is_match("f("));
        assert!(TRIGGER_AFTER_CARET.is_match(" )"));
        assert_eq!(
            TRIGGER_BEFORE_CARET.captures_len(),
            TRIGGER_AFTER_CARET.captures_len()
        );
    }

    #[test]
    fn test_trigger_directly_before_caret() {
        assert_eq!(match_trigger("foo(bar)", 4), found('(', 3, 1));
        assert_eq!(match_trigger("a, b, c", 2), found(',', 1, 1));
    }

    #[test]
    fn test_trigger_before_caret_across_whitespace() {
        assert_eq!(match_trigger("a, b, c", 3), found(',', 1, 2));
        assert_eq!(match_trigger("x =\ty", 4), found('=', 2, 2));
    }

    #[test]
    fn test_trigger_directly_after_caret() {
        assert_eq!(match_trigger("foo(bar)", 3), found('(', 3, 0));
        assert_eq!(match_trigger("foo(bar)", 7), found(')', 7, 0));
    }

    #[test]
    fn test_trigger_after_caret_across_whitespace() {
        assert_eq!(match_trigger("foo (bar)", 3), found('(', 4, -1));
    }

    #[test]
    fn test_head_takes_precedence_over_tail() {
        assert_eq!(match_trigger("f()", 2), found('(', 1, 1));
    }

    #[test]
    fn test_no_trigger_adjacent() {
        assert_eq!(match_trigger("foobar", 3), None);
        assert_eq!(match_trigger("foo(bar)", 1), None);
        // Two whitespace characters separate the caret from the comma.
        assert_eq!(match_trigger("a,  b", 4), None);
        assert_eq!(match_trigger("", 0), None);
    }

    #[test]
    fn test_leading_whitespace_is_part_of_span() {
        // " (" ends with the trigger itself, so the caret sits directly after it.
        assert_eq!(match_trigger("x (y", 3), found('(', 2, 1));
    }

    #[test]
    fn test_tab_is_a_trigger() {
        assert_eq!(match_trigger("\tfoo", 1), found('\t', 0, 1));
        assert_eq!(match_trigger("a\t\tb", 3), found('\t', 2, 1));
        assert_eq!(match_trigger("ab\tc", 2), found('\t', 2, 0));
    }

    #[test]
    fn test_every_trigger_char_matches() {
        for ch in TRIGGER_CHARS {
            let line = format!("x{ch}y");
            assert_eq!(match_trigger(&line, 2), found(ch, 1, 1), "trigger {ch:?}");
        }
    }

    #[test]
    fn test_columns_are_chars_not_bytes() {
        assert_eq!(match_trigger("über(x)", 5), found('(', 4, 1));
        assert_eq!(match_trigger("你好, 世界", 4), found(',', 2, 2));
    }

    #[test]
    fn test_column_past_end_uses_whole_line_as_head() {
        assert_eq!(match_trigger("a;", 2), found(';', 1, 1));
        assert_eq!(match_trigger("a;", 10), found(';', 9, 1));
    }

    #[test]
    fn test_matching_is_idempotent() {
        let line = "let v = [a, b];";
        for column in 0..=line.len() {
            assert_eq!(match_trigger(line, column), match_trigger(line, column));
        }
    }
}
