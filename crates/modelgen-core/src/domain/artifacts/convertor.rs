//! Convertor between model and DTO.
//!
//! `@setModelCode@` and `@setDTOCode@` each expand to one copy statement per
//! plain model field; static fields and relationship fields are skipped.

use super::{common_placeholders, template_pipeline};
use crate::domain::engine::{PlaceholderMap, synthesize::capitalize};
use crate::domain::entities::{FieldDecl, GenerationConfig, LineBuffer};
use crate::domain::error::DomainError;
use crate::domain::value_objects::ArtifactKind;

const INDENT: &str = "        ";

pub fn render(config: &GenerationConfig, template: &LineBuffer) -> Result<LineBuffer, DomainError> {
    let fields: Vec<&FieldDecl> = config
        .model()
        .descriptor()
        .fields()
        .iter()
        .filter(|f| !f.is_static && !config.model().relationships().contains(&f.name))
        .collect();

    let set_model = copy_block(&fields, "model", "dto");
    let set_dto = copy_block(&fields, "dto", "model");

    let map = PlaceholderMap::new()
        .pattern(r"^[ \t]*@setModelCode@[ \t]*$", set_model)?
        .pattern(r"^[ \t]*@setDTOCode@[ \t]*$", set_dto)?
        .extend(common_placeholders(config, ArtifactKind::Convertor));

    template_pipeline(&map).run(template.clone())
}

/// `<INDENT><target>.setX(<source>.getX());` per field.
fn copy_block(fields: &[&FieldDecl], target: &str, source: &str) -> String {
    fields
        .iter()
        .map(|field| {
            format!(
                "{INDENT}{target}.{}({source}.{}());",
                setter(field),
                getter(field)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn setter(field: &FieldDecl) -> String {
    format!("set{}", capitalize(&field.name))
}

fn getter(field: &FieldDecl) -> String {
    let prefix = if field.type_name == "boolean" { "is" } else { "get" };
    format!("{prefix}{}", capitalize(&field.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artifacts::fixtures;
    use crate::domain::value_objects::IdType;

    const TEMPLATE: &str = "package @Package@;\n\
        \n\
        import @DTOPath@;\n\
        import @ModelPath@;\n\
        \n\
        public class @Model@Convertor {\n\
        \x20   public @Model@ toModel(final @Model@DTO dto) {\n\
        \x20       final @Model@ model = new @Model@();\n\
        \x20       @setModelCode@\n\
        \x20       return model;\n\
        \x20   }\n\
        \n\
        \x20   public @Model@DTO toDTO(final @Model@ model) {\n\
        \x20       final @Model@DTO dto = new @Model@DTO();\n\
        \x20       @setDTOCode@\n\
        \x20       return dto;\n\
        \x20   }\n\
        }\n";

    #[test]
    fn copies_plain_fields_both_ways() {
        let config = fixtures::config(fixtures::MANAGED_USER, IdType::Long);
        let out = render(&config, &LineBuffer::from_value(TEMPLATE)).unwrap();
        let lines = out.lines();

        let to_model = lines.iter().position(|l| l.contains("toModel")).unwrap();
        assert_eq!(
            lines[to_model + 2..to_model + 5],
            [
                "        model.setName(dto.getName());",
                "        model.setActive(dto.isActive());",
                "        model.setBirthday(dto.getBirthday());",
            ]
        );
        assert!(lines.contains(&"        dto.setName(model.getName());".to_string()));
        assert!(!out.iter().any(|l| l.contains("Manager") || l.contains("SerialVersionUID")));
        assert_eq!(lines[0], "package com.acme.convertor;");
    }

    #[test]
    fn model_without_plain_fields_leaves_no_token() {
        let source = "package com.acme.entities;\npublic class User {\n    @ManyToOne\n    private Team team;\n}\n";
        let config = fixtures::config(source, IdType::Long);
        let out = render(&config, &LineBuffer::from_value(TEMPLATE)).unwrap();
        assert!(!out.iter().any(|l| l.contains('@')));
    }
}
