//! Generation Service - main application orchestrator.
//!
//! This service coordinates one whole generation run:
//! 1. Validate the request
//! 2. Check that every requested model exists (all misses reported together)
//! 3. Load every selected template
//! 4. Analyze every model (no output has been produced yet)
//! 5. Render and emit each artifact of each model
//!
//! Steps 1-4 abort the run on the first failure. In step 5 a failed artifact
//! is logged and recorded, and the remaining artifacts still go out.

use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ModelResolver, SourceRootResolver},
        services::{EmitOutcome, OutputService, OutputTarget, TemplateService},
    },
    domain::{
        AnalyzedModel, ArtifactKind, DomainValidator as validator, GenerationConfig,
        GenerationRequest, LineBuffer, ModelDescriptor, OutputMode, artifacts,
    },
    error::{ModelgenError, ModelgenResult},
};

/// Result of one artifact.
#[derive(Debug, Clone)]
pub enum ArtifactStatus {
    Emitted(EmitOutcome),
    Failed(ModelgenError),
}

#[derive(Debug, Clone)]
pub struct ArtifactRecord {
    pub model: String,
    pub kind: ArtifactKind,
    pub status: ArtifactStatus,
}

/// Everything a run produced, in emission order.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    records: Vec<ArtifactRecord>,
}

impl GenerationReport {
    pub fn records(&self) -> &[ArtifactRecord] {
        &self.records
    }

    /// Paths of files that were written.
    pub fn written(&self) -> Vec<&PathBuf> {
        self.outcomes()
            .filter_map(|o| match o {
                EmitOutcome::Written { path } => Some(path),
                _ => None,
            })
            .collect()
    }

    /// Paths left untouched because overwrite was disabled.
    pub fn skipped(&self) -> Vec<&PathBuf> {
        self.outcomes()
            .filter_map(|o| match o {
                EmitOutcome::SkippedExisting { path } => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn echoed(&self) -> usize {
        self.outcomes()
            .filter(|o| matches!(o, EmitOutcome::Echoed))
            .count()
    }

    pub fn failures(&self) -> Vec<&ArtifactRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.status, ArtifactStatus::Failed(_)))
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }

    fn outcomes(&self) -> impl Iterator<Item = &EmitOutcome> {
        self.records.iter().filter_map(|r| match &r.status {
            ArtifactStatus::Emitted(outcome) => Some(outcome),
            ArtifactStatus::Failed(_) => None,
        })
    }
}

/// Main generation service.
pub struct GenerationService {
    resolver: Box<dyn ModelResolver>,
    templates: TemplateService,
    output: OutputService,
    source_root: Box<dyn SourceRootResolver>,
}

impl GenerationService {
    pub fn new(
        resolver: Box<dyn ModelResolver>,
        templates: TemplateService,
        output: OutputService,
        source_root: Box<dyn SourceRootResolver>,
    ) -> Self {
        Self {
            resolver,
            templates,
            output,
            source_root,
        }
    }

    /// Run one generation request.
    #[instrument(skip_all, fields(request = %request))]
    pub fn generate(&self, request: &GenerationRequest) -> ModelgenResult<GenerationReport> {
        validator::validate_request(request)?;
        self.check_models_exist(request)?;

        let templates = self.load_templates(request.artifacts())?;
        let configs = self.analyze_all(request)?;
        info!(models = configs.len(), "All models analyzed");

        let source_root = match request.output() {
            OutputMode::File => Some(self.source_root.source_root()?),
            OutputMode::Console => None,
        };

        let mut report = GenerationReport::default();
        for config in &configs {
            for (kind, template) in &templates {
                let emitted = self.emit_one(
                    *kind,
                    config,
                    template.as_ref(),
                    request,
                    source_root.as_deref(),
                );
                let status = match emitted {
                    Ok(outcome) => ArtifactStatus::Emitted(outcome),
                    Err(e) => {
                        error!(
                            model = config.model().simple_name(),
                            kind = %kind,
                            error = %e,
                            "Artifact generation failed"
                        );
                        ArtifactStatus::Failed(e)
                    }
                };
                report.records.push(ArtifactRecord {
                    model: config.model().simple_name().to_string(),
                    kind: *kind,
                    status,
                });
            }
        }

        info!(
            written = report.written().len(),
            skipped = report.skipped().len(),
            failed = report.failures().len(),
            "Generation finished"
        );
        Ok(report)
    }

    /// Fully-qualified names of the models under a namespace.
    pub fn list_models(&self, namespace: &str) -> ModelgenResult<Vec<String>> {
        validator::validate_qualified_name(namespace)?;
        let mut names = self.resolver.list(namespace)?;
        names.sort();
        Ok(names)
    }

    fn check_models_exist(&self, request: &GenerationRequest) -> ModelgenResult<()> {
        let missing: Vec<String> = request
            .models()
            .iter()
            .filter(|model| !self.resolver.exists(&request.qualified_name(model)))
            .cloned()
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        Err(ApplicationError::ModelsNotFound {
            names: missing,
            namespace: request.namespace().to_string(),
        }
        .into())
    }

    fn load_templates(
        &self,
        kinds: &[ArtifactKind],
    ) -> ModelgenResult<Vec<(ArtifactKind, Option<LineBuffer>)>> {
        kinds
            .iter()
            .map(|&kind| -> ModelgenResult<(ArtifactKind, Option<LineBuffer>)> {
                Ok((kind, self.templates.load_for(kind)?))
            })
            .collect()
    }

    fn analyze_all(&self, request: &GenerationRequest) -> ModelgenResult<Vec<GenerationConfig>> {
        request
            .models()
            .iter()
            .map(|model| -> ModelgenResult<GenerationConfig> {
                let source = self.resolver.resolve(&request.qualified_name(model))?;
                let descriptor = ModelDescriptor::parse(&source.qualified_name, &source.source)?;
                validator::validate_model(&descriptor)?;
                let analyzed = AnalyzedModel::analyze(descriptor)?;
                debug!(
                    model = analyzed.simple_name(),
                    relationships = analyzed.relationships().all_names().len(),
                    "Model analyzed"
                );
                Ok(GenerationConfig::new(analyzed, request)?)
            })
            .collect()
    }

    fn emit_one(
        &self,
        kind: ArtifactKind,
        config: &GenerationConfig,
        template: Option<&LineBuffer>,
        request: &GenerationRequest,
        source_root: Option<&Path>,
    ) -> ModelgenResult<EmitOutcome> {
        let body = artifacts::render(kind, config, template)?;
        let target = match source_root {
            Some(root) => OutputTarget::File {
                path: config.layout().output_path(root, kind),
                overwrite: request.overwrite(),
            },
            None => OutputTarget::Console,
        };
        self.output.emit(kind, &body.to_value(), &target)
    }
}
