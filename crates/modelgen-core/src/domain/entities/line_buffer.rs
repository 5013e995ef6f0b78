//! Ordered, index-addressable line sequence.
//!
//! Every engine pass consumes and returns a `LineBuffer`. Deletions go
//! through [`DeletionMarks`]: passes record indices first and then call
//! [`LineBuffer::compact`] exactly once, so no index computed during a scan
//! is invalidated by an earlier removal.

use std::collections::BTreeSet;
use std::fmt;

/// A source or template body split into lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split a body into lines.
    ///
    /// Carriage returns are dropped. A trailing newline produces a trailing
    /// empty line, so `from_value(s).to_value() == s` for any `s` without
    /// `\r`.
    pub fn from_value(value: &str) -> Self {
        let value = value.replace('\r', "");
        Self {
            lines: value.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Join lines with `\n`.
    pub fn to_value(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Insert `line` so that it ends up at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, like `Vec::insert`.
    pub fn insert(&mut self, index: usize, line: impl Into<String>) {
        self.lines.insert(index, line.into());
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.lines.pop()
    }

    /// Index of the first line matching `predicate`.
    pub fn position(&self, predicate: impl Fn(&str) -> bool) -> Option<usize> {
        self.lines.iter().position(|l| predicate(l))
    }

    /// Index of the last line matching `predicate`.
    pub fn rposition(&self, predicate: impl Fn(&str) -> bool) -> Option<usize> {
        self.lines.iter().rposition(|l| predicate(l))
    }

    /// Remove every marked line in one pass, keeping the order of the rest.
    pub fn compact(self, marks: &DeletionMarks) -> Self {
        if marks.is_empty() {
            return self;
        }
        let lines = self
            .lines
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !marks.contains(*index))
            .map(|(_, line)| line)
            .collect();
        Self { lines }
    }
}

impl fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value())
    }
}

impl From<&str> for LineBuffer {
    fn from(value: &str) -> Self {
        Self::from_value(value)
    }
}

impl From<Vec<String>> for LineBuffer {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

impl FromIterator<String> for LineBuffer {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

// ── DeletionMarks ─────────────────────────────────────────────────────────────

/// Indices scheduled for deletion from a [`LineBuffer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionMarks {
    indices: BTreeSet<usize>,
}

impl DeletionMarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, index: usize) {
        self.indices.insert(index);
    }

    /// Mark the inclusive range `from..=to`.
    pub fn mark_range(&mut self, from: usize, to: usize) {
        self.indices.extend(from..=to);
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_bodies_without_carriage_returns() {
        for body in [
            "",
            "\n",
            "a",
            "a\nb",
            "a\nb\n",
            "\n\nx\n\n",
            "package a;\n\npublic class A {\n}\n",
        ] {
            assert_eq!(LineBuffer::from_value(body).to_value(), body, "{body:?}");
        }
    }

    #[test]
    fn carriage_returns_are_dropped() {
        let buf = LineBuffer::from_value("a\r\nb\r\n");
        assert_eq!(buf.lines(), ["a", "b", ""]);
    }

    #[test]
    fn compaction_removes_only_marked_lines() {
        let buf = LineBuffer::from_value("0\n1\n2\n3\n4");
        let mut marks = DeletionMarks::new();
        marks.mark(1);
        marks.mark_range(3, 4);

        assert_eq!(buf.compact(&marks).lines(), ["0", "2"]);
    }

    #[test]
    fn lines_equal_to_any_value_survive_compaction() {
        // Any text is a legitimate line; there is no reserved marker value.
        let buf = LineBuffer::new(vec!["<<DELETE>>".into(), "".into(), "x".into()]);
        let out = buf.compact(&DeletionMarks::new());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn position_helpers_find_first_and_last() {
        let buf = LineBuffer::from_value("import a;\nx\nimport b;");
        assert_eq!(buf.position(|l| l.starts_with("import")), Some(0));
        assert_eq!(buf.rposition(|l| l.starts_with("import")), Some(2));
        assert_eq!(buf.position(|l| l == "missing"), None);
    }
}
