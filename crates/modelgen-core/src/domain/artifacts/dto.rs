//! Transfer object: the model body with persistence details removed and
//! every relationship replaced by a scalar `<name>Id` field.

use crate::domain::engine::{
    Anchor, Pass, PlaceholderMap, Pipeline, format, placeholder, prune, strip, synthesize,
};
use crate::domain::entities::{GenerationConfig, LineBuffer};
use crate::domain::error::DomainError;
use crate::domain::value_objects::ArtifactKind;

/// Persistence annotations dropped from the DTO, one per line.
const DROPPED_ANNOTATIONS: [&str; 8] = [
    "Entity",
    "Table",
    "Lob",
    "Column",
    "Enumerated",
    "Temporal",
    "Type",
    "org.hibernate.annotations.Type",
];

pub fn render(config: &GenerationConfig) -> Result<LineBuffer, DomainError> {
    let map = placeholders(config)?;
    let relationships = config.model().relationships().all_names();
    let id_type = config.id_type().type_name();

    let pipeline = Pipeline::new()
        .then(Pass::infallible("filter", |body| placeholder::filter(body, &map)))
        .then(Pass::infallible("strip", |body| strip::strip(body, &relationships)))
        .then(Pass::new("synthesize", |body| {
            synthesize::synthesize(body, Anchor::TYPE_HEADER, &relationships, |name| {
                format!("    private {id_type} {name}Id;")
            })
        }))
        .then(Pass::infallible("prune", prune::prune))
        .then(Pass::infallible("format", format::normalize));

    pipeline.run(config.model().descriptor().body().clone())
}

fn placeholders(config: &GenerationConfig) -> Result<PlaceholderMap, DomainError> {
    let layout = config.layout();
    let class_name = layout.class_name(ArtifactKind::Dto);

    let mut package_line = format!("package {};", layout.package(ArtifactKind::Dto));
    let header = match (config.dto_base_class(), config.dto_base_simple_name()) {
        (Some(base), Some(simple)) => {
            package_line.push_str(&format!("\nimport {base};"));
            format!("public class {class_name} extends {simple} {{")
        }
        _ => format!("public class {class_name} {{"),
    };

    let mut map = PlaceholderMap::new()
        .pattern(r"^[ \t]*package[ \t]+[\w.]+[ \t]*;[ \t]*$", package_line)?
        .pattern(
            r"^[ \t]*import[ \t]+(?:javax|jakarta)\.persistence\.[^\n]*\n",
            "",
        )?
        .pattern(r"^[^\n]*\bserialVersionUID\b[^\n]*\n", "")?;

    for annotation in DROPPED_ANNOTATIONS {
        let escaped = annotation.replace('.', r"\.");
        map = map.pattern(&format!(r"^[ \t]*@{escaped}\b[^\n]*\n"), "")?;
    }

    map.pattern(
        r"^[ \t]*(?:public[ \t]+)?(?:final[ \t]+|abstract[ \t]+)*class[ \t]+\w+[^\n]*\{[ \t]*$",
        header,
    )
}
