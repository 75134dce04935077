//! Glue between `validator` derive output and [`CoreError`].
//!
//! DTOs in the db crate and request bodies in the api crate derive
//! [`Validate`]; handlers call [`validate_input`] before touching the
//! database so every rejection surfaces as `CoreError::Validation`.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the derived validation rules for `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(CoreError::from)
}

/// Flatten a [`ValidationErrors`] tree into a single human-readable line.
///
/// Fields are listed alphabetically so the message is stable across runs.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            format!("{field}: {}", reasons.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Reject strings that are empty once surrounding whitespace is removed.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}
