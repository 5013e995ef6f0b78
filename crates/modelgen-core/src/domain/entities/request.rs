//! The `GenerationRequest` aggregate and the per-model `GenerationConfig`.
//!
//! A `GenerationRequest` describes one whole run: which models, which
//! artifacts, where output goes. Once built it is guaranteed consistent:
//! namespace and model list are non-empty, overwrite is only ever set for
//! file output, and the artifact selection is in canonical order.
//!
//! # Typestate builder
//!
//! The builder uses two phantom marker types (`NoNamespace` / `HasNamespace`)
//! so that a namespace must be given before anything else. `build()` checks
//! the remaining cross-field rules.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;
use std::marker::PhantomData;

use crate::domain::entities::{AnalyzedModel, PackageLayout};
use crate::domain::entities::model::validate_qualified_name;
use crate::domain::error::DomainError;
use crate::domain::value_objects::{ArtifactKind, IdType, OutputMode};

// ── Aggregate root ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    namespace: String,
    models: Vec<String>,
    entity_package: String,
    output: OutputMode,
    overwrite: bool,
    id_type: IdType,
    artifacts: Vec<ArtifactKind>,
    dto_base_class: Option<String>,
}

impl GenerationRequest {
    pub fn builder() -> GenerationRequestBuilder<NoNamespace> {
        GenerationRequestBuilder::new()
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Package segment that holds the models (`entities` in
    /// `com.acme.entities.User`).
    pub fn entity_package(&self) -> &str {
        &self.entity_package
    }

    pub const fn output(&self) -> OutputMode {
        self.output
    }

    /// Always `false` unless output goes to files.
    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub const fn id_type(&self) -> IdType {
        self.id_type
    }

    /// Selected kinds in canonical order, without duplicates.
    pub fn artifacts(&self) -> &[ArtifactKind] {
        &self.artifacts
    }

    pub fn dto_base_class(&self) -> Option<&str> {
        self.dto_base_class.as_deref()
    }

    /// `<namespace>.<model>`
    pub fn qualified_name(&self, model: &str) -> String {
        format!("{}.{}", self.namespace, model)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.namespace.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "namespace" });
        }
        validate_qualified_name(&self.namespace)?;
        if self.models.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "models" });
        }
        for model in &self.models {
            if model.contains('.') {
                return Err(DomainError::InvalidRequest(format!(
                    "model '{model}' must be a simple name relative to the namespace"
                )));
            }
            validate_qualified_name(model)?;
        }
        if self.entity_package.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "entity_package",
            });
        }
        if self.artifacts.is_empty() {
            return Err(DomainError::InvalidRequest(
                "at least one artifact kind must be selected".into(),
            ));
        }
        if self.overwrite && self.output != OutputMode::File {
            return Err(DomainError::InvalidRequest(
                "overwrite only applies to file output".into(),
            ));
        }
        if let Some(base) = &self.dto_base_class {
            validate_qualified_name(base)?;
        }
        Ok(())
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] -> {}",
            self.namespace,
            self.models.join(","),
            self.output
        )
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

pub struct NoNamespace;
pub struct HasNamespace;

// ── Builder ───────────────────────────────────────────────────────────────────

pub struct GenerationRequestBuilder<N> {
    namespace: String,
    models: Vec<String>,
    entity_package: Option<String>,
    output: OutputMode,
    overwrite: bool,
    id_type: IdType,
    artifacts: Option<Vec<ArtifactKind>>,
    dto_base_class: Option<String>,
    _marker: PhantomData<N>,
}

impl GenerationRequestBuilder<NoNamespace> {
    pub fn new() -> Self {
        Self {
            namespace: String::new(),
            models: Vec::new(),
            entity_package: None,
            output: OutputMode::default(),
            overwrite: false,
            id_type: IdType::default(),
            artifacts: None,
            dto_base_class: None,
            _marker: PhantomData,
        }
    }

    /// Base package of the models, e.g. `com.acme.entities`.
    pub fn namespace(self, namespace: impl Into<String>) -> GenerationRequestBuilder<HasNamespace> {
        GenerationRequestBuilder {
            namespace: namespace.into().trim().to_string(),
            models: self.models,
            entity_package: self.entity_package,
            output: self.output,
            overwrite: self.overwrite,
            id_type: self.id_type,
            artifacts: self.artifacts,
            dto_base_class: self.dto_base_class,
            _marker: PhantomData,
        }
    }
}

impl Default for GenerationRequestBuilder<NoNamespace> {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationRequestBuilder<HasNamespace> {
    /// Add model simple names. Blank entries are ignored.
    pub fn models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.models.extend(
            models
                .into_iter()
                .map(|m| m.as_ref().trim().to_string())
                .filter(|m| !m.is_empty()),
        );
        self
    }

    /// Parse a comma-separated model list (`User,Member,Role`).
    pub fn models_csv(self, csv: &str) -> Self {
        self.models(csv.split(','))
    }

    pub fn entity_package(mut self, segment: impl Into<String>) -> Self {
        self.entity_package = Some(segment.into());
        self
    }

    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn id_type(mut self, id_type: IdType) -> Self {
        self.id_type = id_type;
        self
    }

    pub fn artifacts(mut self, artifacts: &[ArtifactKind]) -> Self {
        self.artifacts = Some(artifacts.to_vec());
        self
    }

    /// Superclass for generated DTOs, e.g. `com.acme.base.AbstractAuditDTO`.
    pub fn dto_base_class(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.dto_base_class = (!base.trim().is_empty()).then(|| base.trim().to_string());
        self
    }

    pub fn build(self) -> Result<GenerationRequest, DomainError> {
        // Defaults to the last namespace segment: `com.acme.entities` → `entities`.
        let entity_package = self
            .entity_package
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| {
                self.namespace
                    .rsplit('.')
                    .next()
                    .unwrap_or_default()
                    .to_string()
            });

        let artifacts = match self.artifacts {
            Some(selection) => ArtifactKind::ordered(&selection),
            None => ArtifactKind::ALL.to_vec(),
        };

        let request = GenerationRequest {
            overwrite: self.overwrite && self.output == OutputMode::File,
            namespace: self.namespace,
            models: self.models,
            entity_package,
            output: self.output,
            id_type: self.id_type,
            artifacts,
            dto_base_class: self.dto_base_class,
        };
        request.validate()?;
        Ok(request)
    }
}

// ── Per-model configuration ───────────────────────────────────────────────────

/// Everything a generator needs for one model: the analyzed model, its
/// package layout and the run-wide settings. Shared by reference across the
/// artifact generators of that model.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    model: AnalyzedModel,
    layout: PackageLayout,
    id_type: IdType,
    dto_base_class: Option<String>,
}

impl GenerationConfig {
    pub fn new(
        model: AnalyzedModel,
        request: &GenerationRequest,
    ) -> Result<Self, DomainError> {
        let layout = PackageLayout::new(
            model.descriptor().package(),
            request.entity_package(),
            model.simple_name(),
        )?;
        Ok(Self {
            model,
            layout,
            id_type: request.id_type(),
            dto_base_class: request.dto_base_class.clone(),
        })
    }

    pub fn model(&self) -> &AnalyzedModel {
        &self.model
    }

    pub fn layout(&self) -> &PackageLayout {
        &self.layout
    }

    pub const fn id_type(&self) -> IdType {
        self.id_type
    }

    pub fn dto_base_class(&self) -> Option<&str> {
        self.dto_base_class.as_deref()
    }

    /// Simple name of the DTO superclass.
    pub fn dto_base_simple_name(&self) -> Option<&str> {
        self.dto_base_class
            .as_deref()
            .map(|fqn| fqn.rsplit('.').next().unwrap_or(fqn))
    }
}
