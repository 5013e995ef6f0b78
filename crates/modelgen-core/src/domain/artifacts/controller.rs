//! API handler.

use super::{common_placeholders, template_pipeline};
use crate::domain::entities::{GenerationConfig, LineBuffer};
use crate::domain::error::DomainError;
use crate::domain::value_objects::ArtifactKind;

pub fn render(config: &GenerationConfig, template: &LineBuffer) -> Result<LineBuffer, DomainError> {
    let map = common_placeholders(config, ArtifactKind::Controller);
    template_pipeline(&map).run(template.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artifacts::fixtures;
    use crate::domain::value_objects::IdType;

    #[test]
    fn wires_convertor_and_service() {
        let template = "package @Package@;\n\
            import @DTOPath@;\n\
            import @ConvertorPath@;\n\
            import @ServicePath@;\n\
            import @RepositoryPath@;\n\
            @RestController\n\
            @RequestMapping(\"/w/@model@s\")\n\
            public class @Model@Controller {\n\
            \x20   private @Model@Service @model@Service;\n\
            \x20   private @Model@Convertor @model@Convertor;\n\
            \x20   public @Model@DTO get(@IdType@ id) { return null; }\n\
            }\n";
        let config = fixtures::config(fixtures::MANAGED_USER, IdType::Long);
        let out = render(&config, &LineBuffer::from_value(template)).unwrap();
        assert_eq!(
            out.to_value(),
            "package com.acme.controller;\n\
             \n\
             import com.acme.dto.UserDTO;\n\
             import com.acme.convertor.UserConvertor;\n\
             import com.acme.service.UserService;\n\
             @RestController\n\
             @RequestMapping(\"/w/users\")\n\
             public class UserController {\n\
             \x20   private UserService userService;\n\
             \n\
             \x20   private UserConvertor userConvertor;\n\
             \n\
             \x20   public UserDTO get(Long id) { return null; }\n\
             }\n"
        );
    }
}
