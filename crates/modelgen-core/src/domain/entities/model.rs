//! Model descriptor: a model type's identity, body and declared fields.

use crate::domain::engine::syntax;
use crate::domain::entities::LineBuffer;
use crate::domain::error::DomainError;

/// One field declared by a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub type_name: String,
    pub is_static: bool,
}

/// A model type loaded from source.
///
/// Immutable once parsed; one per model per generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescriptor {
    qualified_name: String,
    simple_name: String,
    package: String,
    body: LineBuffer,
    fields: Vec<FieldDecl>,
}

impl ModelDescriptor {
    /// Parse a model from its fully-qualified name and source text.
    pub fn parse(qualified_name: &str, source: &str) -> Result<Self, DomainError> {
        let qualified_name = qualified_name.trim();
        validate_qualified_name(qualified_name)?;

        let (package, simple_name) = match qualified_name.rsplit_once('.') {
            Some((package, simple)) => (package.to_string(), simple.to_string()),
            None => (String::new(), qualified_name.to_string()),
        };

        let body = LineBuffer::from_value(source);
        if body.position(syntax::is_type_header).is_none() {
            return Err(DomainError::MissingTypeHeader {
                model: qualified_name.to_string(),
            });
        }

        let fields = body
            .iter()
            .filter_map(|line| {
                let name = syntax::field_identifier(line)?;
                let type_name = syntax::field_type(line)?;
                Some(FieldDecl {
                    name: name.to_string(),
                    type_name,
                    is_static: syntax::is_static_field(line),
                })
            })
            .collect();

        Ok(Self {
            qualified_name: qualified_name.to_string(),
            simple_name,
            package,
            body,
            fields,
        })
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn body(&self) -> &LineBuffer {
        &self.body
    }

    pub fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }
}

/// Check a dotted name: non-empty segments made of identifier characters,
/// none starting with a digit.
pub fn validate_qualified_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidQualifiedName {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    for segment in name.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            None => return Err(invalid("empty segment")),
            Some(c) if c.is_ascii_digit() => {
                return Err(invalid("segment starts with a digit"));
            }
            Some(_) => {}
        }
        if !segment.chars().all(syntax::is_identifier_char) {
            return Err(invalid("segment contains invalid characters"));
        }
    }
    Ok(())
}
