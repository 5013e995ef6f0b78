// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for modelgen.
//!
//! This module contains the whole text-transformation engine and the six
//! artifact generators as pure logic. All I/O (model lookup, template
//! loading, writing output) is handled via ports defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: `tracing` stays in the application and adapters
//! - **Pure passes**: every transformation is `LineBuffer -> LineBuffer`
//! - **Analyze once**: relationships are extracted before any generator runs
//!
// Public API - what the world sees
pub mod artifacts;
pub mod engine;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    AnalyzedModel, DeletionMarks, FieldDecl, GenerationConfig, GenerationRequest,
    GenerationRequestBuilder, HasNamespace, LineBuffer, ModelDescriptor, NoNamespace,
    PackageLayout, RelationshipKind, RelationshipSet,
};

pub use engine::{Anchor, Pass, PlaceholderMap, Pipeline};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{ArtifactKind, IdType, OutputMode, TemplatePaths};

pub use validation::DomainValidator;
