//! Artifact generators.
//!
//! Each artifact kind is a [`Pipeline`] over the engine passes. The DTO is
//! derived from the model body; every other kind fills a template.
//!
//! | kind         | pipeline                                       |
//! |--------------|------------------------------------------------|
//! | DTO          | filter, strip, synthesize, prune, format       |
//! | Repository   | filter, synthesize, prune, format              |
//! | Service      | filter, prune, format                          |
//! | ServiceImpl  | filter, prune, format                          |
//! | Convertor    | filter (with property mapping), prune, format  |
//! | Controller   | filter, prune, format                          |

pub mod controller;
pub mod convertor;
pub mod dto;
pub mod repository;
pub mod service;
pub mod service_impl;

use convert_case::{Case, Casing};

use crate::domain::engine::{Pass, PlaceholderMap, Pipeline, format, placeholder, prune};
use crate::domain::entities::{GenerationConfig, LineBuffer};
use crate::domain::error::DomainError;
use crate::domain::value_objects::ArtifactKind;

/// Produce the body of one artifact.
///
/// `template` is ignored for the DTO and required for every other kind.
pub fn render(
    kind: ArtifactKind,
    config: &GenerationConfig,
    template: Option<&LineBuffer>,
) -> Result<LineBuffer, DomainError> {
    let template = || {
        template.ok_or(DomainError::TemplateRequired {
            kind: kind.as_str(),
        })
    };
    match kind {
        ArtifactKind::Dto => dto::render(config),
        ArtifactKind::Repository => repository::render(config, template()?),
        ArtifactKind::Service => service::render(config, template()?),
        ArtifactKind::ServiceImpl => service_impl::render(config, template()?),
        ArtifactKind::Convertor => convertor::render(config, template()?),
        ArtifactKind::Controller => controller::render(config, template()?),
    }
}

/// Tokens every template may use.
///
/// | token              | value                                   |
/// |--------------------|-----------------------------------------|
/// | `@Package@`        | package of the artifact being generated |
/// | `@ModelPath@`      | fully-qualified model name              |
/// | `@DTOPath@` …      | fully-qualified sibling artifact names  |
/// | `@Model@`          | `GoodsOrder`                            |
/// | `@model@`          | `goodsOrder`                            |
/// | `@SeparateModel@`  | `Goods order`                           |
/// | `@IdType@`         | `Long`, `String` or `Integer`           |
pub fn common_placeholders(config: &GenerationConfig, kind: ArtifactKind) -> PlaceholderMap {
    let layout = config.layout();
    let name = config.model().simple_name();
    PlaceholderMap::new()
        .token("@IdType@", config.id_type().type_name())
        .token("@Package@", layout.package(kind))
        .token("@ModelPath@", config.model().descriptor().qualified_name())
        .token("@DTOPath@", layout.class_path(ArtifactKind::Dto))
        .token("@RepositoryPath@", layout.class_path(ArtifactKind::Repository))
        .token("@ServicePath@", layout.class_path(ArtifactKind::Service))
        .token("@ConvertorPath@", layout.class_path(ArtifactKind::Convertor))
        .token("@SeparateModel@", name.to_case(Case::Sentence))
        .token("@model@", name.to_case(Case::Camel))
        .token("@Model@", name)
}

/// `filter → prune → format`, the pipeline of every plain template kind.
pub(crate) fn template_pipeline(map: &PlaceholderMap) -> Pipeline<'_> {
    Pipeline::new()
        .then(Pass::infallible("filter", move |body| placeholder::filter(body, map)))
        .then(Pass::infallible("prune", prune::prune))
        .then(Pass::infallible("format", format::normalize))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::entities::{
        AnalyzedModel, GenerationConfig, GenerationRequest, ModelDescriptor,
    };
    use crate::domain::value_objects::IdType;

    pub const MANAGED_USER: &str = "package com.acme.entities;\n\
        \n\
        import javax.persistence.Entity;\n\
        import javax.persistence.ManyToOne;\n\
        import javax.persistence.Table;\n\
        import java.io.Serializable;\n\
        import java.time.LocalDate;\n\
        \n\
        @Entity\n\
        @Table(name = \"users\")\n\
        public class User implements Serializable {\n\
        \x20   private static final long serialVersionUID = 1L;\n\
        \n\
        \x20   @Column(nullable = false)\n\
        \x20   private String name;\n\
        \n\
        \x20   private boolean active;\n\
        \n\
        \x20   private LocalDate birthday;\n\
        \n\
        \x20   @ManyToOne\n\
        \x20   private User manager; // @ManyToOne\n\
        }\n";

    pub fn config(source: &str, id_type: IdType) -> GenerationConfig {
        let request = GenerationRequest::builder()
            .namespace("com.acme.entities")
            .models(["User"])
            .id_type(id_type)
            .build()
            .unwrap();
        let descriptor = ModelDescriptor::parse("com.acme.entities.User", source).unwrap();
        GenerationConfig::new(AnalyzedModel::analyze(descriptor).unwrap(), &request).unwrap()
    }
}
