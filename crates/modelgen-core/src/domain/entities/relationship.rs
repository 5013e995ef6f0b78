//! Relationship metadata extracted from a model body.

use serde::Serialize;
use std::fmt;

use crate::domain::engine::extract;
use crate::domain::entities::{LineBuffer, ModelDescriptor};
use crate::domain::error::DomainError;

/// Cardinality of an association between two models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipKind {
    OneToOne,
    ManyToOne,
    OneToMany,
}

impl RelationshipKind {
    /// Kinds in the order generated code lists them.
    pub const ALL: [Self; 3] = [Self::OneToOne, Self::ManyToOne, Self::OneToMany];

    /// The annotation that introduces a field of this kind.
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::OneToOne => "@OneToOne",
            Self::ManyToOne => "@ManyToOne",
            Self::OneToMany => "@OneToMany",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Field names per relationship kind, in encounter order.
///
/// Duplicates are kept: a name listed twice produces generated code twice,
/// the same way the marker appears twice in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationshipSet {
    one_to_one: Vec<String>,
    many_to_one: Vec<String>,
    one_to_many: Vec<String>,
}

impl RelationshipSet {
    /// Scan a model body once for every relationship kind.
    ///
    /// Fails on any `@ManyToMany` marker before extracting anything.
    pub fn analyze(body: &LineBuffer) -> Result<Self, DomainError> {
        extract::reject_many_to_many(body)?;
        Ok(Self {
            one_to_one: extract::extract(body, RelationshipKind::OneToOne)?,
            many_to_one: extract::extract(body, RelationshipKind::ManyToOne)?,
            one_to_many: extract::extract(body, RelationshipKind::OneToMany)?,
        })
    }

    pub fn from_parts(
        one_to_one: Vec<String>,
        many_to_one: Vec<String>,
        one_to_many: Vec<String>,
    ) -> Self {
        Self {
            one_to_one,
            many_to_one,
            one_to_many,
        }
    }

    pub fn names(&self, kind: RelationshipKind) -> &[String] {
        match kind {
            RelationshipKind::OneToOne => &self.one_to_one,
            RelationshipKind::ManyToOne => &self.many_to_one,
            RelationshipKind::OneToMany => &self.one_to_many,
        }
    }

    pub fn one_to_one(&self) -> &[String] {
        &self.one_to_one
    }

    pub fn many_to_one(&self) -> &[String] {
        &self.many_to_one
    }

    pub fn one_to_many(&self) -> &[String] {
        &self.one_to_many
    }

    /// Every name across kinds: one-to-one, then many-to-one, then one-to-many.
    pub fn all_names(&self) -> Vec<String> {
        RelationshipKind::ALL
            .iter()
            .flat_map(|kind| self.names(*kind).iter().cloned())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        RelationshipKind::ALL
            .iter()
            .any(|kind| self.names(*kind).iter().any(|n| n == name))
    }

    pub fn is_empty(&self) -> bool {
        self.one_to_one.is_empty() && self.many_to_one.is_empty() && self.one_to_many.is_empty()
    }
}

/// A parsed model together with its relationships.
///
/// Built once by the analyze phase; generators only ever read it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedModel {
    descriptor: ModelDescriptor,
    relationships: RelationshipSet,
}

impl AnalyzedModel {
    pub fn analyze(descriptor: ModelDescriptor) -> Result<Self, DomainError> {
        let relationships = RelationshipSet::analyze(descriptor.body())?;
        Ok(Self {
            descriptor,
            relationships,
        })
    }

    pub fn descriptor(&self) -> &ModelDescriptor {
        &self.descriptor
    }

    pub fn relationships(&self) -> &RelationshipSet {
        &self.relationships
    }

    pub fn simple_name(&self) -> &str {
        self.descriptor.simple_name()
    }
}
