//! Token and pattern substitution over a whole body.

use regex::{NoExpand, Regex};

use crate::domain::entities::LineBuffer;
use crate::domain::error::DomainError;

/// What a placeholder entry matches.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Exact text, replaced everywhere it occurs.
    Literal(String),
    /// A regular expression compiled in multi-line mode, so `^` and `$`
    /// anchor at line boundaries.
    Regex(Regex),
}

/// Ordered pattern → replacement table.
///
/// Each entry is applied once, in insertion order, over the whole body.
/// Replacements are inserted verbatim (`$1` is not expanded) and the result
/// of one entry is never re-scanned by that same entry. Patterns that match
/// nothing are not an error: unresolved tokens stay in the output.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderMap {
    entries: Vec<(Pattern, String)>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a literal token.
    pub fn token(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .push((Pattern::Literal(token.into()), value.into()));
        self
    }

    /// Add a line-aware regular expression.
    pub fn pattern(mut self, pattern: &str, value: impl Into<String>) -> Result<Self, DomainError> {
        let regex = Regex::new(&format!("(?m){pattern}")).map_err(|e| {
            DomainError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        self.entries.push((Pattern::Regex(regex), value.into()));
        Ok(self)
    }

    /// Append every entry of `other` after this map's entries.
    pub fn extend(mut self, other: PlaceholderMap) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every entry to `value`.
    pub fn apply(&self, value: &str) -> String {
        self.entries
            .iter()
            .fold(value.to_string(), |acc, (pattern, replacement)| match pattern {
                Pattern::Literal(token) => acc.replace(token.as_str(), replacement),
                Pattern::Regex(regex) => regex
                    .replace_all(&acc, NoExpand(replacement.as_str()))
                    .into_owned(),
            })
    }
}

/// Run the map over a buffer; replacements may add or remove lines.
pub fn filter(body: LineBuffer, map: &PlaceholderMap) -> LineBuffer {
    if map.is_empty() {
        return body;
    }
    LineBuffer::from_value(&map.apply(&body.to_value()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_tokens_replace_every_occurrence() {
        let map = PlaceholderMap::new().token("@Model@", "User");
        assert_eq!(map.apply("@Model@ x = new @Model@();"), "User x = new User();");
    }

    #[test]
    fn line_anchored_patterns_match_whole_lines() {
        let map = PlaceholderMap::new()
            .pattern(r"^package\s+[\w.]+;$", "package com.acme.dto;")
            .unwrap();
        let out = map.apply("package com.acme.entities;\nimport a.package_b;\n");
        assert_eq!(out, "package com.acme.dto;\nimport a.package_b;\n");
    }

    #[test]
    fn replacements_are_not_expanded() {
        let map = PlaceholderMap::new().pattern(r"X", "$1 cost").unwrap();
        assert_eq!(map.apply("X"), "$1 cost");
    }

    #[test]
    fn entries_run_once_in_insertion_order() {
        let map = PlaceholderMap::new().token("a", "aa").token("b", "a");
        // `a` → `aa` happens before `b` → `a`; the new `a` is not revisited.
        assert_eq!(map.apply("ab"), "aaa");
    }

    #[test]
    fn unknown_tokens_stay_verbatim() {
        let map = PlaceholderMap::new().token("@Model@", "User");
        assert_eq!(map.apply("@Other@"), "@Other@");
    }

    #[test]
    fn invalid_pattern_is_reported() {
        assert!(matches!(
            PlaceholderMap::new().pattern("(", ""),
            Err(DomainError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn filter_can_remove_whole_lines() {
        let map = PlaceholderMap::new().pattern(r"^@Entity[ \t]*\n", "").unwrap();
        let out = filter(LineBuffer::from_value("@Entity\npublic class A {"), &map);
        assert_eq!(out.lines(), ["public class A {"]);
    }
}
