//! Local filesystem adapter using std::fs.

use std::path::Path;

use modelgen_core::{application::ports::Filesystem, error::ModelgenResult};

use crate::error::AdapterError;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ModelgenResult<()> {
        std::fs::create_dir_all(path)
            .map_err(|e| AdapterError::io("create directory", path, e).into())
    }

    fn write_file(&self, path: &Path, content: &str) -> ModelgenResult<()> {
        std::fs::write(path, content).map_err(|e| AdapterError::io("write file", path, e).into())
    }

    fn read_to_string(&self, path: &Path) -> ModelgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| AdapterError::io("read file", path, e).into())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
