//! In-memory model resolver for testing.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use modelgen_core::{
    application::{
        ApplicationError,
        ports::{ModelResolver, ModelSource},
    },
    error::ModelgenResult,
};

#[derive(Debug, Clone, Default)]
pub struct MemoryModelResolver {
    models: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryModelResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_model(self, qualified_name: &str, source: &str) -> Self {
        self.insert(qualified_name, source);
        self
    }

    pub fn insert(&self, qualified_name: &str, source: &str) {
        if let Ok(mut models) = self.models.write() {
            models.insert(qualified_name.to_string(), source.to_string());
        }
    }
}

impl ModelResolver for MemoryModelResolver {
    fn exists(&self, qualified_name: &str) -> bool {
        self.models
            .read()
            .map(|m| m.contains_key(qualified_name))
            .unwrap_or(false)
    }

    fn resolve(&self, qualified_name: &str) -> ModelgenResult<ModelSource> {
        let models = self
            .models
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let source = models
            .get(qualified_name)
            .cloned()
            .ok_or_else(|| ApplicationError::ResolverError {
                model: qualified_name.to_string(),
                reason: "not registered".into(),
            })?;
        Ok(ModelSource {
            qualified_name: qualified_name.to_string(),
            source,
        })
    }

    fn list(&self, namespace: &str) -> ModelgenResult<Vec<String>> {
        let models = self
            .models
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let prefix = format!("{namespace}.");
        Ok(models
            .keys()
            .filter(|k| {
                k.strip_prefix(&prefix)
                    .is_some_and(|rest| !rest.contains('.'))
            })
            .cloned()
            .collect())
    }
}
