use crate::types::DbId;

/// Domain error taxonomy shared by every layer.
///
/// The API crate maps each variant to an HTTP status; repositories and
/// validation helpers only ever produce these.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Credentials did not match a known account.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// The caller's token is missing, invalid, or carries the wrong role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(crate::validation::describe(&errors))
    }
}
