//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `modelgen-adapters` crate provides implementations.

use crate::error::ModelgenResult;
use std::path::{Path, PathBuf};

/// Raw source of one model as found by a [`ModelResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSource {
    pub qualified_name: String,
    pub source: String,
}

/// Port for locating model sources.
///
/// Implemented by:
/// - `modelgen_adapters::model_resolver::SourceTreeModelResolver` (production)
/// - `modelgen_adapters::model_resolver::MemoryModelResolver` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ModelResolver: Send + Sync {
    /// Whether a model with this fully-qualified name exists.
    fn exists(&self, qualified_name: &str) -> bool;

    /// Load the source of a model.
    fn resolve(&self, qualified_name: &str) -> ModelgenResult<ModelSource>;

    /// Fully-qualified names of every model directly under `namespace`.
    fn list(&self, namespace: &str) -> ModelgenResult<Vec<String>>;
}

/// Port for loading template bodies by logical path.
///
/// Implemented by:
/// - `modelgen_adapters::template_store::InMemoryTemplateStore` (built-in defaults)
/// - `modelgen_adapters::template_loader::FilesystemTemplateLoader` (user templates)
/// - `modelgen_adapters::template_loader::LayeredTemplateLoader` (first hit wins)
pub trait TemplateLoader: Send + Sync {
    /// `Ok(None)` means "not found" and lets the caller fall back.
    fn load(&self, path: &str) -> ModelgenResult<Option<String>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modelgen_adapters::filesystem::LocalFilesystem` (production)
/// - `modelgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ModelgenResult<()>;

    /// Write content to a file, replacing what was there.
    fn write_file(&self, path: &Path, content: &str) -> ModelgenResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ModelgenResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for console output.
///
/// Implemented by:
/// - `modelgen_adapters::console::StdoutConsole` (production)
/// - `modelgen_adapters::console::MemoryConsole` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Console: Send + Sync {
    /// Write a block of text followed by a newline.
    fn write_block(&self, text: &str) -> ModelgenResult<()>;
}

/// Port for finding the directory generated files are written under.
///
/// Implemented by:
/// - `modelgen_adapters::source_root::BuildOutputSourceRoot` (derived from the runtime location)
/// - `modelgen_adapters::source_root::FixedSourceRoot` (explicit path)
pub trait SourceRootResolver: Send + Sync {
    fn source_root(&self) -> ModelgenResult<PathBuf>;
}
