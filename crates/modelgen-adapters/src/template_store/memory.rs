//! In-memory template store with built-in templates.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use modelgen_core::{
    application::{ApplicationError, ports::TemplateLoader},
    error::ModelgenResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store keyed by logical path.
#[derive(Debug, Clone)]
pub struct InMemoryTemplateStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with the built-in default templates loaded.
    pub fn with_builtin() -> ModelgenResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load the built-in default templates.
    pub fn load_builtin(&self) -> ModelgenResult<()> {
        for (path, body) in builtin_templates::ALL {
            self.insert(path, body)?;
        }
        Ok(())
    }

    /// Add or replace a template.
    pub fn insert(&self, path: impl Into<String>, body: impl Into<String>) -> ModelgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(path.into(), body.into());
        Ok(())
    }

    /// Remove a template. Returns whether it was present.
    pub fn remove(&self, path: &str) -> ModelgenResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.remove(path).is_some())
    }

    /// Stored logical paths, sorted.
    pub fn paths(&self) -> ModelgenResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let mut paths: Vec<String> = inner.keys().cloned().collect();
        paths.sort();
        Ok(paths)
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateLoader for InMemoryTemplateStore {
    fn load(&self, path: &str) -> ModelgenResult<Option<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(path).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_has_five_defaults() {
        let store = InMemoryTemplateStore::with_builtin().unwrap();
        assert_eq!(store.len(), 5);
        assert!(
            store
                .load("codetemplate/controller-default.template")
                .unwrap()
                .is_some()
        );
    }

    #[test]
    fn unknown_path_is_none_not_error() {
        let store = InMemoryTemplateStore::new();
        assert!(store.is_empty());
        assert_eq!(store.load("codetemplate/service.template").unwrap(), None);
    }

    #[test]
    fn insert_and_remove() {
        let store = InMemoryTemplateStore::new();
        store.insert("codetemplate/service.template", "custom").unwrap();
        assert_eq!(
            store.load("codetemplate/service.template").unwrap().as_deref(),
            Some("custom")
        );
        assert!(store.remove("codetemplate/service.template").unwrap());
        assert!(!store.remove("codetemplate/service.template").unwrap());
    }
}
