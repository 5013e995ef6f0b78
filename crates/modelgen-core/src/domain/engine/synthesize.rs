//! Insertion of generated lines after an anchor.

use super::syntax;
use crate::domain::entities::LineBuffer;
use crate::domain::error::DomainError;

/// A named line predicate marking where generated code goes.
#[derive(Clone, Copy)]
pub struct Anchor {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
}

impl Anchor {
    /// The opening line of the first class, interface, enum or record.
    pub const TYPE_HEADER: Self = Self {
        name: "type declaration",
        matches: syntax::is_type_header,
    };
}

impl std::fmt::Debug for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Anchor").field(&self.name).finish()
    }
}

/// Insert one blank line and one built line per name right after the first
/// line matching `anchor`.
///
/// A moving cursor keeps the generated lines in the order of `names`. With
/// no names the body is returned untouched and no anchor is required.
pub fn synthesize(
    mut body: LineBuffer,
    anchor: Anchor,
    names: &[String],
    build: impl Fn(&str) -> String,
) -> Result<LineBuffer, DomainError> {
    if names.is_empty() {
        return Ok(body);
    }
    let anchor_index = body
        .position(anchor.matches)
        .ok_or(DomainError::AnchorNotFound {
            anchor: anchor.name,
        })?;

    let mut cursor = anchor_index + 1;
    for name in names {
        body.insert(cursor, "");
        body.insert(cursor + 1, build(name));
        cursor += 2;
    }
    Ok(body)
}

/// Insert `line` after the last import, or after the package header when
/// there are no imports, unless an identical line is already present.
///
/// Returns whether a line was inserted.
pub fn insert_import(body: &mut LineBuffer, line: &str) -> bool {
    if body.iter().any(|existing| existing.trim() == line) {
        return false;
    }
    let position = body
        .rposition(syntax::is_import)
        .or_else(|| body.position(syntax::is_package_header))
        .map_or(0, |index| index + 1);
    body.insert(position, line);
    true
}

/// Upper-case the first character.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
