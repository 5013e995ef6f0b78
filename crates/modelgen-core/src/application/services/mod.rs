//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate artifacts for these models".

pub mod generation_service;
pub mod output_service;
pub mod template_service;

pub use generation_service::{ArtifactRecord, ArtifactStatus, GenerationReport, GenerationService};
pub use output_service::{EmitOutcome, OutputService, OutputTarget, banner};
pub use template_service::{ArtifactInfo, TemplateOrigin, TemplateService};
