//! Infrastructure adapters for modelgen.
//!
//! This crate implements the ports defined in `modelgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod console;
pub mod error;
pub mod filesystem;
pub mod model_resolver;
pub mod source_root;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use console::{MemoryConsole, StdoutConsole};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use model_resolver::{MemoryModelResolver, SourceTreeModelResolver};
pub use source_root::{BuildOutputSourceRoot, FixedSourceRoot};
pub use template_loader::{FilesystemTemplateLoader, LayeredTemplateLoader};
pub use template_store::InMemoryTemplateStore;
