//! Service implementation, placed in the `impl` sub-package of the service.

use super::{common_placeholders, template_pipeline};
use crate::domain::entities::{GenerationConfig, LineBuffer};
use crate::domain::error::DomainError;
use crate::domain::value_objects::ArtifactKind;

pub fn render(config: &GenerationConfig, template: &LineBuffer) -> Result<LineBuffer, DomainError> {
    let map = common_placeholders(config, ArtifactKind::ServiceImpl);
    template_pipeline(&map).run(template.clone())
}
