use crate::domain::{
    entities::{GenerationRequest, ModelDescriptor, model},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_request(request: &GenerationRequest) -> Result<(), DomainError> {
        request.validate()
    }

    pub fn validate_qualified_name(name: &str) -> Result<(), DomainError> {
        model::validate_qualified_name(name)
    }

    /// The model must still carry its type declaration.
    pub fn validate_model(descriptor: &ModelDescriptor) -> Result<(), DomainError> {
        model::validate_qualified_name(descriptor.qualified_name())?;
        if descriptor
            .body()
            .position(crate::domain::engine::syntax::is_type_header)
            .is_none()
        {
            return Err(DomainError::MissingTypeHeader {
                model: descriptor.qualified_name().to_string(),
            });
        }
        Ok(())
    }
}
