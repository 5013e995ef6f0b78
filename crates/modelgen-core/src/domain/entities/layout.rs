//! Package and path conventions for generated artifacts.

use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;
use crate::domain::value_objects::ArtifactKind;

/// Where a model's artifacts live, derived from the model's package.
///
/// `com.acme.entities.admin.User` with entity segment `entities` gives the
/// parent package `com.acme` and the child suffix `admin`; the DTO then
/// lives in `com.acme.dto.admin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    parent: String,
    child: Option<String>,
    model_name: String,
}

impl PackageLayout {
    pub fn new(
        model_package: &str,
        entity_segment: &str,
        model_name: &str,
    ) -> Result<Self, DomainError> {
        let segments: Vec<&str> = model_package.split('.').collect();
        let position = segments
            .iter()
            .position(|s| *s == entity_segment)
            .filter(|&index| index > 0)
            .ok_or_else(|| DomainError::EntityPackageNotFound {
                package: model_package.to_string(),
                segment: entity_segment.to_string(),
            })?;

        let parent = segments[..position].join(".");
        let child = (position + 1 < segments.len()).then(|| segments[position + 1..].join("."));

        Ok(Self {
            parent,
            child,
            model_name: model_name.to_string(),
        })
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn child(&self) -> Option<&str> {
        self.child.as_deref()
    }

    /// Package of an artifact kind.
    pub fn package(&self, kind: ArtifactKind) -> String {
        let mut package = format!("{}.{}", self.parent, kind.package_segment());
        if let Some(child) = &self.child {
            package.push('.');
            package.push_str(child);
        }
        if kind == ArtifactKind::ServiceImpl {
            package.push_str(".impl");
        }
        package
    }

    pub fn class_name(&self, kind: ArtifactKind) -> String {
        format!("{}{}", self.model_name, kind.class_suffix())
    }

    /// Fully-qualified class name of an artifact kind.
    pub fn class_path(&self, kind: ArtifactKind) -> String {
        format!("{}.{}", self.package(kind), self.class_name(kind))
    }

    /// `<source_root>/<package as dirs>/<Class>.java`
    pub fn output_path(&self, source_root: &Path, kind: ArtifactKind) -> PathBuf {
        let mut path = source_root.to_path_buf();
        for segment in self.package(kind).split('.') {
            path.push(segment);
        }
        path.push(format!("{}.java", self.class_name(kind)));
        path
    }
}
