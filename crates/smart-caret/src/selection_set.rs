use crate::commands::{Position, Selection, SelectionDirection};
use crate::insert::InsertDirection;

pub fn selection_direction(start: Position, end: Position) -> SelectionDirection {
    if start <= end {
        SelectionDirection::Forward
    } else {
        SelectionDirection::Backward
    }
}

/// Stable sort by the line of each selection's active end. Columns do not take part, so carets on
/// the same line keep their relative order.
pub fn order_by_end_line(selections: &[Selection]) -> Vec<Selection> {
    let mut ordered = selections.to_vec();
    ordered.sort_by_key(|sel| sel.end.line);
    ordered
}

/// Returns `(anchor, reference)` from a line-ordered caret set.
///
/// The anchor is the caret nearest the line being inserted; the reference is the caret at the
/// opposite end of the order.
pub fn anchor_and_reference(
    ordered: &[Selection],
    direction: InsertDirection,
) -> Option<(Position, Position)> {
    let first = ordered.first()?.end;
    let last = ordered.last()?.end;
    Some(match direction {
        InsertDirection::Below => (last, first),
        InsertDirection::Above => (first, last),
    })
}
