//! Resolves models from a Java source tree.
//!
//! `com.acme.entities.User` maps to `<root>/com/acme/entities/User.java`.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use modelgen_core::{
    application::ports::{ModelResolver, ModelSource},
    error::ModelgenResult,
};

use crate::error::AdapterError;

const SOURCE_EXTENSION: &str = "java";

#[derive(Debug, Clone)]
pub struct SourceTreeModelResolver {
    root: PathBuf,
}

impl SourceTreeModelResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Source file a qualified name maps to.
    pub fn path_for(&self, qualified_name: &str) -> PathBuf {
        let mut path = self.package_dir(qualified_name);
        path.set_extension(SOURCE_EXTENSION);
        path
    }

    fn package_dir(&self, name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in name.split('.') {
            path.push(segment);
        }
        path
    }
}

impl ModelResolver for SourceTreeModelResolver {
    fn exists(&self, qualified_name: &str) -> bool {
        self.path_for(qualified_name).is_file()
    }

    #[instrument(skip(self))]
    fn resolve(&self, qualified_name: &str) -> ModelgenResult<ModelSource> {
        let path = self.path_for(qualified_name);
        let source = std::fs::read_to_string(&path).map_err(|e| AdapterError::Model {
            model: qualified_name.to_string(),
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        debug!(file = %path.display(), bytes = source.len(), "Model source read");
        Ok(ModelSource {
            qualified_name: qualified_name.to_string(),
            source,
        })
    }

    fn list(&self, namespace: &str) -> ModelgenResult<Vec<String>> {
        let dir = self.package_dir(namespace);
        if !dir.is_dir() {
            warn!(dir = %dir.display(), "Namespace directory does not exist");
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| AdapterError::Model {
                model: namespace.to_string(),
                reason: e.to_string(),
            })?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(format!("{namespace}.{stem}"));
            }
        }
        names.sort();
        Ok(names)
    }
}
