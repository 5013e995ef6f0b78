//! Template Service - template lookup with custom/default fallback.
//!
//! Separated from GenerationService for single responsibility.

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::TemplateLoader},
    domain::{ArtifactKind, LineBuffer, TemplatePaths},
    error::ModelgenResult,
};

/// Which template an artifact kind currently resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOrigin {
    Custom,
    Default,
    /// Derived from the model body; no template involved.
    Model,
    Missing,
}

impl TemplateOrigin {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Default => "default",
            Self::Model => "model",
            Self::Missing => "missing",
        }
    }
}

/// Information about an artifact kind for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactInfo {
    pub kind: ArtifactKind,
    pub class_suffix: &'static str,
    pub package_segment: &'static str,
    pub custom_template: Option<&'static str>,
    pub default_template: Option<&'static str>,
    pub origin: TemplateOrigin,
}

/// Service for template operations.
pub struct TemplateService {
    loader: Box<dyn TemplateLoader>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(loader: Box<dyn TemplateLoader>) -> Self {
        Self { loader }
    }

    /// Template body for an artifact kind, or `None` for the DTO.
    pub fn load_for(&self, kind: ArtifactKind) -> ModelgenResult<Option<LineBuffer>> {
        match kind.template_paths() {
            Some(paths) => self.load(paths).map(Some),
            None => Ok(None),
        }
    }

    /// Load the custom template, falling back to the default one.
    #[instrument(skip(self), fields(custom = paths.custom))]
    pub fn load(&self, paths: TemplatePaths) -> ModelgenResult<LineBuffer> {
        if let Some(body) = self.loader.load(paths.custom)? {
            debug!("Using custom template");
            return Ok(LineBuffer::from_value(&body));
        }
        if let Some(body) = self.loader.load(paths.default)? {
            debug!(default = paths.default, "Using default template");
            return Ok(LineBuffer::from_value(&body));
        }
        Err(ApplicationError::TemplateNotFound {
            custom: paths.custom.to_string(),
            default: paths.default.to_string(),
        }
        .into())
    }

    /// Describe every artifact kind and where its template comes from.
    pub fn describe(&self) -> ModelgenResult<Vec<ArtifactInfo>> {
        ArtifactKind::ALL
            .iter()
            .map(|&kind| -> ModelgenResult<ArtifactInfo> {
                let paths = kind.template_paths();
                let origin = match paths {
                    None => TemplateOrigin::Model,
                    Some(p) => {
                        if self.loader.load(p.custom)?.is_some() {
                            TemplateOrigin::Custom
                        } else if self.loader.load(p.default)?.is_some() {
                            TemplateOrigin::Default
                        } else {
                            TemplateOrigin::Missing
                        }
                    }
                };
                Ok(ArtifactInfo {
                    kind,
                    class_suffix: kind.class_suffix(),
                    package_segment: kind.package_segment(),
                    custom_template: paths.map(|p| p.custom),
                    default_template: paths.map(|p| p.default),
                    origin,
                })
            })
            .collect()
    }
}
