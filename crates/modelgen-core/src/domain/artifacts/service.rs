//! Service interface.

use super::{common_placeholders, template_pipeline};
use crate::domain::entities::{GenerationConfig, LineBuffer};
use crate::domain::error::DomainError;
use crate::domain::value_objects::ArtifactKind;

pub fn render(config: &GenerationConfig, template: &LineBuffer) -> Result<LineBuffer, DomainError> {
    let map = common_placeholders(config, ArtifactKind::Service);
    template_pipeline(&map).run(template.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artifacts::fixtures;
    use crate::domain::value_objects::IdType;

    #[test]
    fn fills_package_and_names() {
        let template = "package @Package@;\n\
            \n\
            import @ModelPath@;\n\
            import java.util.Optional;\n\
            \n\
            public interface @Model@Service {\n\
            \x20   @Model@ get(@IdType@ id);\n\
            }\n";
        let config = fixtures::config(fixtures::MANAGED_USER, IdType::Integer);
        let out = render(&config, &LineBuffer::from_value(template)).unwrap();
        assert_eq!(
            out.to_value(),
            "package com.acme.service;\n\
             \n\
             import com.acme.entities.User;\n\
             \n\
             public interface UserService {\n\
             \x20   User get(Integer id);\n\
             }\n"
        );
    }
}
