//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// One or more requested models could not be resolved.
    #[error(
        "Models array contains models [{}] that don't exist in '{namespace}'",
        .names.join(",")
    )]
    ModelsNotFound {
        names: Vec<String>,
        namespace: String,
    },

    /// Neither the custom nor the default template exists.
    #[error("Template not found: tried '{custom}' and '{default}'")]
    TemplateNotFound { custom: String, default: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Model source could not be read or located.
    #[error("Failed to resolve model '{model}': {reason}")]
    ResolverError { model: String, reason: String },

    /// No source root could be derived from the runtime location.
    #[error("Source root unavailable: {reason}")]
    SourceRootUnavailable { reason: String },

    /// Console output failed.
    #[error("Output failed: {reason}")]
    OutputFailed { reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,

    /// Configuration rejected at the application boundary.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ModelsNotFound { names, namespace } => vec![
                format!("Missing: {}", names.join(", ")),
                format!("Check that each model exists under '{}'", namespace),
                "Try: modelgen list models to see what can be found".into(),
            ],
            Self::TemplateNotFound { custom, .. } => vec![
                format!("Place a custom template at '{}'", custom),
                "Or point --template-dir at a directory containing codetemplate/".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ResolverError { .. } => vec![
                "Check that the model source file is readable UTF-8".into(),
                "Set --source-root to your project's src/main/java".into(),
            ],
            Self::SourceRootUnavailable { .. } => vec![
                "Run modelgen from inside the project".into(),
                "Or set --source-root explicitly".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::InvalidConfiguration(msg) => vec![
                format!("Configuration issue: {}", msg),
                "Run: modelgen config list to inspect the effective settings".into(),
            ],
            Self::OutputFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModelsNotFound { .. } | Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. }
            | Self::ResolverError { .. }
            | Self::OutputFailed { .. } => ErrorCategory::Io,
            Self::SourceRootUnavailable { .. } | Self::InvalidConfiguration(_) => {
                ErrorCategory::Configuration
            }
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
