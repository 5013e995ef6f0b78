//! Filesystem-based template loading.
//!
//! A template root is any directory containing `codetemplate/`. Logical paths
//! (`codetemplate/service.template`) are resolved relative to the root.
//!
//! ```text
//! src/main/resources/
//! └── codetemplate/
//!     ├── service.template              ← custom, wins over the default
//!     └── controller-default.template   ← replaces the built-in default
//! ```
//!
//! [`LayeredTemplateLoader`] asks several loaders in turn; the CLI stacks the
//! discovered roots on top of the built-in store.

use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, trace};

use modelgen_core::{application::ports::TemplateLoader, error::ModelgenResult};

use crate::error::AdapterError;

/// Loads templates from files under one root directory.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateLoader {
    root: PathBuf,
}

impl FilesystemTemplateLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let mut full = self.root.clone();
        for segment in path.split(['/', '\\']).filter(|s| !s.is_empty()) {
            full.push(segment);
        }
        full
    }
}

impl TemplateLoader for FilesystemTemplateLoader {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, path: &str) -> ModelgenResult<Option<String>> {
        let full = self.resolve(path);
        match std::fs::read_to_string(&full) {
            Ok(body) => {
                debug!(file = %full.display(), "Template loaded from disk");
                Ok(Some(body))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                trace!(file = %full.display(), "Template not on disk");
                Ok(None)
            }
            Err(e) => Err(AdapterError::io("read template", full, e).into()),
        }
    }
}

/// Asks each loader in order; the first hit wins.
#[derive(Default)]
pub struct LayeredTemplateLoader {
    layers: Vec<Box<dyn TemplateLoader>>,
}

impl LayeredTemplateLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer below the existing ones.
    pub fn with_layer(mut self, layer: impl TemplateLoader + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl TemplateLoader for LayeredTemplateLoader {
    fn load(&self, path: &str) -> ModelgenResult<Option<String>> {
        for layer in &self.layers {
            if let Some(body) = layer.load(path)? {
                return Ok(Some(body));
            }
        }
        Ok(None)
    }
}
