//! Line classifiers shared by the engine passes.
//!
//! This is a structural scan, not a parser: each function looks at a single
//! line and answers from its shape. Anything outside the recognised shapes
//! is treated as an opaque line.

use regex::Regex;
use std::sync::LazyLock;

static TYPE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:(?:public|protected|private|abstract|final|static|sealed)\s+)*(?:class|interface|enum|record|@interface)\s+\w+.*\{\s*$",
    )
    .expect("type header pattern is valid")
});

static PACKAGE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*package\s+[\w.]+\s*;\s*$").expect("package header pattern is valid")
});

/// The line without a trailing `//` comment. A `//` inside a string or
/// character literal is part of the code.
pub fn code_part(line: &str) -> &str {
    let mut end = line.len();
    let mut slash = None;
    scan_code(line, |index, c| {
        if c == '/' && slash == Some(index.wrapping_sub(1)) {
            end = index - 1;
            return false;
        }
        slash = (c == '/').then_some(index);
        true
    });
    &line[..end]
}

/// Visit every character outside `"..."` and `'...'` literals, quotes
/// excluded. The visitor returns `false` to stop.
fn scan_code(text: &str, mut visit: impl FnMut(usize, char) -> bool) {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (index, c) in text.char_indices() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None => {
                if !visit(index, c) {
                    return;
                }
            }
        }
    }
}

/// Byte index of the `)` that closes the `(` opening `text`.
fn closing_paren(text: &str) -> Option<usize> {
    let mut depth = 0;
    let mut found = None;
    scan_code(text, |index, c| {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    found = Some(index);
                    return false;
                }
            }
            _ => {}
        }
        true
    });
    found
}

/// `text` after any leading annotations such as `@ManyToOne` or
/// `@Column(name = "x")`. An unbalanced argument list stops the skip.
fn without_annotations(text: &str) -> &str {
    let mut rest = text.trim_start();
    while let Some(after_at) = rest.strip_prefix('@') {
        let name_len = after_at
            .find(|c: char| !(is_identifier_char(c) || c == '.'))
            .unwrap_or(after_at.len());
        if name_len == 0 {
            break;
        }
        let mut tail = after_at[name_len..].trim_start();
        if tail.starts_with('(') {
            let Some(close) = closing_paren(tail) else {
                break;
            };
            tail = tail[close + 1..].trim_start();
        }
        rest = tail;
    }
    rest
}

/// The declaration a field line carries: code only, leading annotations
/// removed.
fn declaration(line: &str) -> &str {
    without_annotations(code_part(line)).trim_end()
}

/// The part of a declaration before its initializer.
fn declarator(line: &str) -> &str {
    let code = declaration(line);
    code.split('=').next().unwrap_or(code)
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// `private Type name;`, `protected Type name = init;` and the like.
///
/// Leading annotations and a trailing `//` comment are allowed. Lines with
/// a `(` before the initializer are method declarations and never match.
pub fn is_field_declaration(line: &str) -> bool {
    let code = declaration(line);
    if !(code.starts_with("private ") || code.starts_with("protected ")) || !code.ends_with(';') {
        return false;
    }
    !declarator(line).contains('(')
}

/// The declared identifier of a field line.
pub fn field_identifier(line: &str) -> Option<&str> {
    if !is_field_declaration(line) {
        return None;
    }
    declarator(line)
        .trim()
        .trim_end_matches(';')
        .split_whitespace()
        .last()
}

/// The declared type of a field line (every token between the modifiers and
/// the identifier).
pub fn field_type(line: &str) -> Option<String> {
    let name = field_identifier(line)?;
    let declarator = declarator(line).trim().trim_end_matches(';').trim();
    let without_name = declarator.strip_suffix(name)?.trim_end();
    let type_tokens: Vec<&str> = without_name
        .split_whitespace()
        .skip_while(|token| is_modifier(token))
        .collect();
    if type_tokens.is_empty() {
        None
    } else {
        Some(type_tokens.join(" "))
    }
}

/// Whether a field line carries the `static` modifier.
pub fn is_static_field(line: &str) -> bool {
    is_field_declaration(line)
        && declaration(line)
            .split_whitespace()
            .take_while(|token| is_modifier(token))
            .any(|token| token == "static")
}

fn is_modifier(token: &str) -> bool {
    matches!(
        token,
        "private" | "protected" | "public" | "static" | "final" | "transient" | "volatile"
    )
}

/// A `class`, `interface`, `enum` or `record` line that opens its body.
pub fn is_type_header(line: &str) -> bool {
    TYPE_HEADER.is_match(line)
}

pub fn is_package_header(line: &str) -> bool {
    PACKAGE_HEADER.is_match(line)
}

/// The dotted name of a package header line.
pub fn package_name(line: &str) -> Option<&str> {
    if !is_package_header(line) {
        return None;
    }
    Some(
        line.trim()
            .trim_start_matches("package")
            .trim()
            .trim_end_matches(';')
            .trim(),
    )
}

pub fn is_import(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("import ") || trimmed.starts_with("import\t")
}

/// The imported simple name. Wildcard imports have none.
pub fn import_symbol(line: &str) -> Option<&str> {
    if !is_import(line) {
        return None;
    }
    let path = line
        .trim()
        .trim_start_matches("import")
        .trim_start()
        .trim_start_matches("static ")
        .split(';')
        .next()?
        .trim();
    if path.ends_with('*') {
        return None;
    }
    path.rsplit('.').next().filter(|symbol| !symbol.is_empty())
}

/// Where a backward walk from a field line stops: the previous field, the
/// type header, or any line that visibly ends a statement or block.
pub fn is_statement_boundary(line: &str) -> bool {
    if is_field_declaration(line) || is_type_header(line) {
        return true;
    }
    let code = code_part(line).trim_end();
    code.ends_with(';') || code.ends_with('{') || code.ends_with('}')
}

/// Opening minus closing parentheses in the code part of a line, literals
/// excluded.
pub fn paren_balance(line: &str) -> i32 {
    let mut balance = 0;
    scan_code(code_part(line), |_, c| {
        match c {
            '(' => balance += 1,
            ')' => balance -= 1,
            _ => {}
        }
        true
    });
    balance
}

pub fn is_closing_brace(line: &str) -> bool {
    line.trim() == "}"
}

/// `true` for the first character after an identifier boundary.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_field_shapes() {
        assert!(is_field_declaration("    private User manager;"));
        assert!(is_field_declaration("    private User manager; // @ManyToOne"));
        assert!(is_field_declaration(
            "    private List<Order> orders = new ArrayList<>();"
        ));
        assert!(is_field_declaration("  protected Map<String, Long> counts;"));
        assert!(!is_field_declaration("    private void reset();"));
        assert!(!is_field_declaration("    public String name;"));
        assert!(!is_field_declaration("    // private User manager;"));
    }

    #[test]
    fn extracts_identifier_and_type() {
        let line = "    private static final long serialVersionUID = 1L;";
        assert_eq!(field_identifier(line), Some("serialVersionUID"));
        assert_eq!(field_type(line).as_deref(), Some("long"));
        assert!(is_static_field(line));

        let line = "    private Map<String, Long> counts; // totals";
        assert_eq!(field_identifier(line), Some("counts"));
        assert_eq!(field_type(line).as_deref(), Some("Map<String, Long>"));
        assert!(!is_static_field(line));
    }

    #[test]
    fn classifies_headers() {
        assert!(is_type_header("public class User extends Base implements Serializable {"));
        assert!(is_type_header("public interface UserRepository extends JpaRepository<User, Long> {"));
        assert!(!is_type_header("public class User"));
        assert!(is_package_header("package com.acme.entities;"));
        assert_eq!(package_name("package com.acme.entities;"), Some("com.acme.entities"));
        assert!(!is_package_header("package com.acme.entities"));
    }

    #[test]
    fn import_symbols() {
        assert_eq!(import_symbol("import java.util.List;"), Some("List"));
        assert_eq!(
            import_symbol("import static org.junit.Assert.assertEquals;"),
            Some("assertEquals")
        );
        assert_eq!(import_symbol("import javax.persistence.*;"), None);
        assert_eq!(import_symbol("public class A {"), None);
    }

    #[test]
    fn statement_boundaries() {
        assert!(is_statement_boundary("    private Long id;"));
        assert!(is_statement_boundary("public class A {"));
        assert!(is_statement_boundary("    }"));
        assert!(!is_statement_boundary("    @ManyToOne(fetch = FetchType.LAZY)"));
        assert!(!is_statement_boundary(""));
        assert!(!is_statement_boundary("    /** The manager. */"));
    }

    #[test]
    fn paren_balance_ignores_comments() {
        assert_eq!(paren_balance("@JoinTable(name = \"a\","), 1);
        assert_eq!(paren_balance("    inverseJoinColumns = @JoinColumn(name = \"b\"))"), -1);
        assert_eq!(paren_balance("x; // (("), 0);
        assert_eq!(paren_balance("    @Pattern(regexp = \"[)]\")"), 0);
        assert_eq!(paren_balance("    @Pattern(regexp = \"(\\\"\")"), 0);
    }

    #[test]
    fn comment_markers_inside_literals_are_code() {
        let line = "    private String site = \"https://acme.com\"; // home";
        assert_eq!(code_part(line), "    private String site = \"https://acme.com\"; ");
        assert_eq!(code_part("    char c = '/'; // x"), "    char c = '/'; ");
        assert!(is_field_declaration(line));
        assert_eq!(field_identifier(line), Some("site"));
        assert!(is_statement_boundary(line));
    }

    #[test]
    fn leading_annotations_are_skipped() {
        let line = "    @ManyToOne private User manager;";
        assert!(is_field_declaration(line));
        assert_eq!(field_identifier(line), Some("manager"));
        assert_eq!(field_type(line).as_deref(), Some("User"));

        let line = "    @Column(name = \"a(b\") @NotNull private static String code;";
        assert_eq!(field_identifier(line), Some("code"));
        assert!(is_static_field(line));

        assert!(!is_field_declaration("    @ManyToOne"));
        assert!(!is_field_declaration("    @JoinTable(name = \"x\", private A a;"));
    }
}
