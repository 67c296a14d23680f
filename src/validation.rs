use anyhow::anyhow;
use validator::{Validate, ValidationErrors};

use registra_core::errors::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} is invalid", field)))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs a DTO's derive-level validation and flattens the outcome into a
/// single validation error. The first failing submit stops here; nothing
/// reaches the network.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), AppError> {
    dto.validate()
        .map_err(|errors| AppError::validation(anyhow!("{}", format_errors(&errors))))
}
