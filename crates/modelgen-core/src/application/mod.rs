//! Application layer for modelgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService, TemplateService, OutputService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! transformation logic itself. All text rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ArtifactInfo, // DTO for template origin display
    ArtifactRecord,
    ArtifactStatus,
    EmitOutcome,
    GenerationReport,
    GenerationService,
    OutputService,
    OutputTarget,
    TemplateOrigin,
    TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    Console, Filesystem, ModelResolver, ModelSource, SourceRootResolver, TemplateLoader,
};

pub use error::ApplicationError;
