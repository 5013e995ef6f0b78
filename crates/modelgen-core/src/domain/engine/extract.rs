//! Relationship extraction.

use super::syntax;
use crate::domain::entities::{LineBuffer, RelationshipKind};
use crate::domain::error::DomainError;

const MANY_TO_MANY: &str = "@ManyToMany";

/// Whether `line` carries `marker` as a whole annotation name
/// (`@OneToOne` does not match `@OneToOneMapping`).
pub fn has_marker(line: &str, marker: &str) -> bool {
    line.match_indices(marker).any(|(index, _)| {
        line[index + marker.len()..]
            .chars()
            .next()
            .is_none_or(|c| !syntax::is_identifier_char(c))
    })
}

/// Fail if the body declares any many-to-many association.
pub fn reject_many_to_many(body: &LineBuffer) -> Result<(), DomainError> {
    match body.position(|line| has_marker(line, MANY_TO_MANY)) {
        Some(index) => Err(DomainError::ManyToManyForbidden { line: index + 1 }),
        None => Ok(()),
    }
}

/// Names of the fields annotated with `kind`, in encounter order.
///
/// From each marker the scan moves forward over blank lines, further
/// annotations and comments until it reaches a field declaration, and then
/// resumes after that field. A marker written as a trailing comment on the
/// field line itself names that field.
pub fn extract(body: &LineBuffer, kind: RelationshipKind) -> Result<Vec<String>, DomainError> {
    let lines = body.lines();
    let mut names = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        if !has_marker(&lines[index], kind.marker()) {
            index += 1;
            continue;
        }

        let field_index = if syntax::is_field_declaration(&lines[index]) {
            Some(index)
        } else {
            (index + 1..lines.len()).find(|&i| syntax::is_field_declaration(&lines[i]))
        };

        let Some(field_index) = field_index else {
            return Err(DomainError::DanglingRelationshipMarker {
                marker: kind.marker(),
                line: index + 1,
            });
        };

        if let Some(name) = syntax::field_identifier(&lines[field_index]) {
            names.push(name.to_string());
        }
        index = field_index + 1;
    }

    Ok(names)
}
