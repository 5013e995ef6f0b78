//! Blank-line normalisation.

use super::syntax;
use crate::domain::entities::LineBuffer;

/// Normalise blank lines, in this order:
///
/// 1. a blank line after every field declaration
/// 2. a blank line after the package header
/// 3. runs of blank lines collapse to one
/// 4. no blank lines directly before a closing brace on the last line
/// 5. exactly one trailing blank line
///
/// Applying it to its own output changes nothing.
pub fn normalize(body: LineBuffer) -> LineBuffer {
    if body.is_empty() {
        return body;
    }
    let body = blank_after(body, syntax::is_field_declaration);
    let body = blank_after(body, syntax::is_package_header);
    let body = collapse_blank_runs(body);
    let body = trim_before_final_brace(body);
    ensure_trailing_blank(body)
}

fn blank_after(body: LineBuffer, predicate: fn(&str) -> bool) -> LineBuffer {
    let lines = body.into_lines();
    let mut out = Vec::with_capacity(lines.len());
    let mut iter = lines.into_iter().peekable();
    while let Some(line) = iter.next() {
        let needs_blank =
            predicate(&line) && iter.peek().is_some_and(|next| !syntax::is_blank(next));
        out.push(line);
        if needs_blank {
            out.push(String::new());
        }
    }
    LineBuffer::new(out)
}

fn collapse_blank_runs(body: LineBuffer) -> LineBuffer {
    let mut out: Vec<String> = Vec::with_capacity(body.len());
    for line in body.into_lines() {
        let is_blank = syntax::is_blank(&line);
        if is_blank && out.last().is_some_and(|prev| syntax::is_blank(prev)) {
            continue;
        }
        out.push(if is_blank { String::new() } else { line });
    }
    LineBuffer::new(out)
}

/// The closing brace is the last non-blank line; blank lines directly above
/// it are removed.
fn trim_before_final_brace(body: LineBuffer) -> LineBuffer {
    let mut lines = body.into_lines();
    let Some(brace) = lines.iter().rposition(|l| !syntax::is_blank(l)) else {
        return LineBuffer::new(lines);
    };
    if !syntax::is_closing_brace(&lines[brace]) {
        return LineBuffer::new(lines);
    }
    let mut start = brace;
    while start > 0 && syntax::is_blank(&lines[start - 1]) {
        start -= 1;
    }
    lines.drain(start..brace);
    LineBuffer::new(lines)
}

fn ensure_trailing_blank(body: LineBuffer) -> LineBuffer {
    let mut lines = body.into_lines();
    while lines.len() > 1 && lines.last().is_some_and(|l| syntax::is_blank(l)) {
        lines.pop();
    }
    lines.push(String::new());
    LineBuffer::new(lines)
}
