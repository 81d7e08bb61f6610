use garde::Validate;

use crate::error::{AppError, Result};

/// Validates a request payload, flattening all violations into one message.
///
/// # Arguments
///
/// * `payload` - The payload to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the payload is valid.
pub fn validate_payload<T>(payload: &T) -> Result<()>
where
    T: Validate,
    T::Context: Default,
{
    payload.validate().map_err(|report| {
        let message = report
            .iter()
            .map(|(path, error)| format!("{}: {}", path, error.message()))
            .collect::<Vec<_>>()
            .join("; ");
        AppError::Validation(message)
    })
}
