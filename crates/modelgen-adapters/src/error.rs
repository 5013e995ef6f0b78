//! Adapter-level errors and their mapping into `ModelgenError`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use modelgen_core::{application::ApplicationError, error::ModelgenError};

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failed to {operation}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{reason}")]
    Model { model: String, reason: String },

    #[error("no build output directory found in {}", .path.display())]
    NoBuildOutput { path: PathBuf },

    #[error("lock poisoned")]
    LockPoisoned,
}

impl AdapterError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

impl From<AdapterError> for ModelgenError {
    fn from(err: AdapterError) -> Self {
        let reason = err.to_string();
        let app = match err {
            AdapterError::Io { path, .. } => ApplicationError::FilesystemError { path, reason },
            AdapterError::Model { model, .. } => ApplicationError::ResolverError { model, reason },
            AdapterError::NoBuildOutput { .. } => ApplicationError::SourceRootUnavailable { reason },
            AdapterError::LockPoisoned => ApplicationError::StoreLockError,
        };
        app.into()
    }
}
