use crate::errors::{AppError, FieldError};
use crate::layouts::dto::LayoutRequestDto;

/// Checks the declared constraints on a layout request body.
///
/// Collects every violation rather than stopping at the first, so a client
/// sees all problems in one round trip.
pub fn validate_layout_request(req: &LayoutRequestDto) -> Result<(), AppError> {
    let mut fields = Vec::new();

    if req.definition.is_null() {
        fields.push(FieldError::new("definition", "definition is required"));
    }
    if req.metadata.name.trim().is_empty() {
        fields.push(FieldError::new("metadata.name", "name must not be blank"));
    }
    if req.metadata.user.trim().is_empty() {
        fields.push(FieldError::new("metadata.user", "user must not be blank"));
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(fields))
    }
}
