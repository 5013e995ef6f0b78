//! Removal of relationship fields together with their decorations.

use std::collections::HashSet;

use super::syntax;
use crate::domain::entities::{DeletionMarks, LineBuffer};

/// Remove every field named in `names` along with the lines that decorate
/// it.
///
/// For each matching field the walk goes backwards from the field line and
/// marks every line until the previous statement boundary (a field, the
/// type header, or a line ending in `;`, `{` or `}`). Lines inside an open
/// annotation argument list are never boundaries, so multi-line annotation
/// arguments go with their field. Matching compares whole identifiers, so
/// `user` never removes `userGroup`.
pub fn strip(body: LineBuffer, names: &[String]) -> LineBuffer {
    if names.is_empty() {
        return body;
    }
    let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
    let lines = body.lines();
    let mut marks = DeletionMarks::new();

    for (index, line) in lines.iter().enumerate() {
        let Some(name) = syntax::field_identifier(line) else {
            continue;
        };
        if !wanted.contains(name) {
            continue;
        }
        marks.mark(index);
        mark_decorations(lines, index, &mut marks);
    }

    body.compact(&marks)
}

fn mark_decorations(lines: &[String], field_index: usize, marks: &mut DeletionMarks) {
    // Unmatched `)` seen so far while walking upwards.
    let mut open = 0;
    for index in (0..field_index).rev() {
        let line = &lines[index];
        if open <= 0 && syntax::is_statement_boundary(line) {
            break;
        }
        marks.mark(index);
        open -= syntax::paren_balance(line);
    }
}
