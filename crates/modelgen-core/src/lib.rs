//! Modelgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the modelgen
//! code generator: it reads annotated entity models and derives DTO,
//! Repository, Service, ServiceImpl, Convertor and Controller sources from
//! them with a line-level text transformation engine.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           modelgen-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (GenerationService, TemplateService,    │
//! │  OutputService)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (ModelResolver, TemplateLoader,         │
//! │  Filesystem, Console, SourceRoot)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     modelgen-adapters (Infrastructure)  │
//! │ (SourceTreeModelResolver, LocalFs, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (LineBuffer, engine passes, artifacts)  │
//! │         No I/O, no logging              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use modelgen_core::prelude::*;
//!
//! # fn run(service: GenerationService) -> ModelgenResult<()> {
//! let request = GenerationRequest::builder()
//!     .namespace("com.acme.entities")
//!     .models_csv("User,Order")
//!     .artifacts(&[ArtifactKind::Dto, ArtifactKind::Repository])
//!     .build()?;
//!
//! let report = service.generate(&request)?;
//! println!("{} files written", report.written().len());
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArtifactRecord, ArtifactStatus, EmitOutcome, GenerationReport, GenerationService,
        OutputService, OutputTarget, TemplateService,
        ports::{Console, Filesystem, ModelResolver, ModelSource, SourceRootResolver, TemplateLoader},
    };
    pub use crate::domain::{
        ArtifactKind, GenerationRequest, GenerationRequestBuilder, HasNamespace, IdType,
        NoNamespace, OutputMode,
    };
    pub use crate::error::{ErrorCategory, ModelgenError, ModelgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
