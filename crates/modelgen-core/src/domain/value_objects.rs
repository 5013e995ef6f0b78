//! Domain value objects: IdType, OutputMode, ArtifactKind.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, their `FromStr` parsers and the static facts each
//! variant carries (template paths, class suffix, package segment).
//!
//! # Adding a New Artifact Kind
//!
//! 1. Add the enum variant here with its priority and static facts
//! 2. Add a generator module under `domain::artifacts`
//! 3. Add the dispatch arm in `domain::artifacts::render`
//! 4. Done; the services pick it up through `ArtifactKind::ALL`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── IdType ────────────────────────────────────────────────────────────────────

/// Primary-key type used by the generated sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    String,
    #[default]
    Long,
    Integer,
}

impl IdType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Long => "long",
            Self::Integer => "integer",
        }
    }

    /// The type name as it appears in generated source.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Long => "Long",
            Self::Integer => "Integer",
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" | "str" => Ok(Self::String),
            "long" | "i64" => Ok(Self::Long),
            "integer" | "int" | "i32" => Ok(Self::Integer),
            other => Err(DomainError::UnknownValue {
                kind: "id type",
                value: other.to_string(),
            }),
        }
    }
}

// ── OutputMode ────────────────────────────────────────────────────────────────

/// Where generated bodies go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    File,
    Console,
}

impl OutputMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Console => "console",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "console" | "stdout" => Ok(Self::Console),
            other => Err(DomainError::UnknownValue {
                kind: "output mode",
                value: other.to_string(),
            }),
        }
    }
}

// ── ArtifactKind ──────────────────────────────────────────────────────────────

/// Custom and default template locations for one artifact kind.
///
/// The custom path is tried first; the default path is the fallback that the
/// built-in template store always answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplatePaths {
    pub custom: &'static str,
    pub default: &'static str,
}

/// One of the six generated output categories.
///
/// Variants are declared in canonical generation order; `priority()` makes
/// that order explicit so a user-supplied selection can be sorted back into
/// it. The DTO must come first: it is the only kind that transforms the
/// model body itself rather than a template.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Dto,
    Repository,
    Service,
    ServiceImpl,
    Convertor,
    Controller,
}

impl ArtifactKind {
    /// Every kind in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Dto,
        Self::Repository,
        Self::Service,
        Self::ServiceImpl,
        Self::Convertor,
        Self::Controller,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dto => "dto",
            Self::Repository => "repository",
            Self::Service => "service",
            Self::ServiceImpl => "service-impl",
            Self::Convertor => "convertor",
            Self::Controller => "controller",
        }
    }

    pub const fn priority(&self) -> u8 {
        match self {
            Self::Dto => 0,
            Self::Repository => 1,
            Self::Service => 2,
            Self::ServiceImpl => 3,
            Self::Convertor => 4,
            Self::Controller => 5,
        }
    }

    /// Suffix appended to the model's simple name (`User` → `UserDTO`).
    pub const fn class_suffix(&self) -> &'static str {
        match self {
            Self::Dto => "DTO",
            Self::Repository => "Repository",
            Self::Service => "Service",
            Self::ServiceImpl => "ServiceImpl",
            Self::Convertor => "Convertor",
            Self::Controller => "Controller",
        }
    }

    /// Package segment below the parent package. `ServiceImpl` shares the
    /// service segment and adds `.impl` in the layout.
    pub const fn package_segment(&self) -> &'static str {
        match self {
            Self::Dto => "dto",
            Self::Repository => "repository",
            Self::Service | Self::ServiceImpl => "service",
            Self::Convertor => "convertor",
            Self::Controller => "controller",
        }
    }

    /// Template locations. `None` for the DTO, which is derived from the
    /// model source.
    pub const fn template_paths(&self) -> Option<TemplatePaths> {
        match self {
            Self::Dto => None,
            Self::Repository => Some(TemplatePaths {
                custom: "codetemplate/repository.template",
                default: "codetemplate/repository-default.template",
            }),
            Self::Service => Some(TemplatePaths {
                custom: "codetemplate/service.template",
                default: "codetemplate/service-default.template",
            }),
            Self::ServiceImpl => Some(TemplatePaths {
                custom: "codetemplate/service-impl.template",
                default: "codetemplate/service-impl-default.template",
            }),
            Self::Convertor => Some(TemplatePaths {
                custom: "codetemplate/convertor.template",
                default: "codetemplate/convertor-default.template",
            }),
            Self::Controller => Some(TemplatePaths {
                custom: "codetemplate/controller.template",
                default: "codetemplate/controller-default.template",
            }),
        }
    }

    /// Human label used in console banners.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dto => "DTO",
            Self::Repository => "Repository",
            Self::Service => "Service",
            Self::ServiceImpl => "ServiceImpl",
            Self::Convertor => "Convertor",
            Self::Controller => "Controller",
        }
    }

    /// Sort a selection into canonical order, dropping duplicates.
    pub fn ordered(selection: &[Self]) -> Vec<Self> {
        let mut kinds = selection.to_vec();
        kinds.sort_by_key(Self::priority);
        kinds.dedup();
        kinds
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "dto" => Ok(Self::Dto),
            "repository" | "repo" => Ok(Self::Repository),
            "service" => Ok(Self::Service),
            "service-impl" | "serviceimpl" => Ok(Self::ServiceImpl),
            "convertor" | "converter" => Ok(Self::Convertor),
            "controller" => Ok(Self::Controller),
            other => Err(DomainError::UnknownValue {
                kind: "artifact kind",
                value: other.to_string(),
            }),
        }
    }
}
