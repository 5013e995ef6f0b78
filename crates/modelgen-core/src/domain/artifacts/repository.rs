//! Access interface with one finder per to-one relationship.

use super::common_placeholders;
use crate::domain::engine::{Anchor, Pass, Pipeline, format, placeholder, prune, synthesize};
use crate::domain::entities::{GenerationConfig, LineBuffer};
use crate::domain::error::DomainError;
use crate::domain::value_objects::ArtifactKind;

const LIST_IMPORT: &str = "import java.util.List;";

pub fn render(config: &GenerationConfig, template: &LineBuffer) -> Result<LineBuffer, DomainError> {
    let map = common_placeholders(config, ArtifactKind::Repository);
    let relationships = config.model().relationships();
    let model = config.model().simple_name();
    let id_type = config.id_type().type_name();

    let pipeline = Pipeline::new()
        .then(Pass::infallible("filter", |body| placeholder::filter(body, &map)))
        // Many-to-one first: the one-to-one finders are then inserted above
        // them, giving one-to-one, many-to-one in the output.
        .then(Pass::new("synthesize-many-to-one", |body| {
            synthesize::synthesize(
                body,
                Anchor::TYPE_HEADER,
                relationships.many_to_one(),
                |name| finder(&format!("List<{model}>"), name, id_type),
            )
        }))
        .then(Pass::new("synthesize-one-to-one", |body| {
            synthesize::synthesize(
                body,
                Anchor::TYPE_HEADER,
                relationships.one_to_one(),
                |name| finder(model, name, id_type),
            )
        }))
        .then(Pass::infallible("import-list", |mut body| {
            if !relationships.many_to_one().is_empty() || !relationships.one_to_one().is_empty() {
                synthesize::insert_import(&mut body, LIST_IMPORT);
            }
            body
        }))
        .then(Pass::infallible("prune", prune::prune))
        .then(Pass::infallible("format", format::normalize));

    pipeline.run(template.clone())
}

/// `    <returns> findBy<Name>Id(<IdType> <name>Id);`
fn finder(returns: &str, name: &str, id_type: &str) -> String {
    format!(
        "    {returns} findBy{}Id({id_type} {name}Id);",
        synthesize::capitalize(name)
    )
}
