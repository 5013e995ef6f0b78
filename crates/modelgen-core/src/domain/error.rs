// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy per artifact)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid generation request: {0}")]
    InvalidRequest(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Unknown {kind}: '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    #[error("Invalid qualified name '{name}': {reason}")]
    InvalidQualifiedName { name: String, reason: String },

    // ========================================================================
    // Model Errors
    // ========================================================================
    #[error(
        "Forbidden to use @ManyToMany (line {line}), please use two @ManyToOne instead"
    )]
    ManyToManyForbidden { line: usize },

    #[error("Relationship marker {marker} at line {line} is not followed by a field declaration")]
    DanglingRelationshipMarker { marker: &'static str, line: usize },

    #[error("Model '{model}' has no type declaration")]
    MissingTypeHeader { model: String },

    #[error("Package '{package}' does not contain the entity package segment '{segment}'")]
    EntityPackageNotFound { package: String, segment: String },

    // ========================================================================
    // Engine Errors
    // ========================================================================
    #[error("Anchor line not found: {anchor}")]
    AnchorNotFound { anchor: &'static str },

    #[error("Artifact '{kind}' is rendered from a template but none was supplied")]
    TemplateRequired { kind: &'static str },

    #[error("Invalid placeholder pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidRequest(msg) => vec![
                "Check the generator configuration".into(),
                format!("Details: {}", msg),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{}'", field),
                "Set it in the config file or pass it on the command line".into(),
            ],
            Self::UnknownValue { kind, .. } => vec![match *kind {
                "id type" => "Supported id types: string, long, integer".into(),
                "output mode" => "Supported output modes: file, console".into(),
                "artifact kind" => {
                    "Supported kinds: dto, repository, service, service-impl, convertor, controller"
                        .into()
                }
                _ => "See documentation for supported values".into(),
            }],
            Self::ManyToManyForbidden { .. } => vec![
                "Many-to-many associations are not generated".into(),
                "Introduce a join model holding two @ManyToOne relationships instead".into(),
            ],
            Self::DanglingRelationshipMarker { marker, .. } => vec![
                format!("Place a field declaration after {}", marker),
                "Relationship markers must annotate a 'private Type name;' field".into(),
            ],
            Self::AnchorNotFound { anchor } => vec![
                format!("The template has no {} line to insert generated code after", anchor),
                "Check that custom templates keep their type declaration".into(),
            ],
            Self::EntityPackageNotFound { segment, .. } => vec![
                format!("Models must live under a '{}' package segment", segment),
                "Set --entity-package to the segment your models actually use".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRequest(_)
            | Self::MissingRequiredField { .. }
            | Self::UnknownValue { .. }
            | Self::InvalidQualifiedName { .. } => ErrorCategory::Validation,
            Self::ManyToManyForbidden { .. }
            | Self::DanglingRelationshipMarker { .. }
            | Self::MissingTypeHeader { .. }
            | Self::EntityPackageNotFound { .. } => ErrorCategory::Model,
            Self::AnchorNotFound { .. }
            | Self::InvalidPattern { .. }
            | Self::TemplateRequired { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Model,
    NotFound,
    Internal,
}
