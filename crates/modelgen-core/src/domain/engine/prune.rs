//! Removal of imports whose symbol is no longer referenced.

use super::syntax;
use crate::domain::entities::{DeletionMarks, LineBuffer};

/// Drop every non-wildcard import whose simple name does not occur as a
/// whole identifier in any line that is neither an import nor the package
/// header.
pub fn prune(body: LineBuffer) -> LineBuffer {
    let code: Vec<&str> = body
        .iter()
        .filter(|line| !syntax::is_import(line) && !syntax::is_package_header(line))
        .collect();

    let mut marks = DeletionMarks::new();
    for (index, line) in body.iter().enumerate() {
        let Some(symbol) = syntax::import_symbol(line) else {
            continue;
        };
        if !code.iter().any(|l| references(l, symbol)) {
            marks.mark(index);
        }
    }

    body.compact(&marks)
}

/// Whether `line` contains `symbol` bounded by non-identifier characters.
pub fn references(line: &str, symbol: &str) -> bool {
    line.match_indices(symbol).any(|(start, _)| {
        let before = line[..start].chars().next_back();
        let after = line[start + symbol.len()..].chars().next();
        before.is_none_or(|c| !syntax::is_identifier_char(c))
            && after.is_none_or(|c| !syntax::is_identifier_char(c))
    })
}
