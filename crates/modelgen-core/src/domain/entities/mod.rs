pub mod layout;
pub mod line_buffer;
pub mod model;
pub mod relationship;
pub mod request;

pub use crate::domain::DomainError;
pub use layout::PackageLayout;
pub use line_buffer::{DeletionMarks, LineBuffer};
pub use model::{FieldDecl, ModelDescriptor};
pub use relationship::{AnalyzedModel, RelationshipKind, RelationshipSet};
pub use request::{
    GenerationConfig, GenerationRequest, GenerationRequestBuilder, HasNamespace, NoNamespace,
};
