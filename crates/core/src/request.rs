//! Help-desk request status constants and field limits.
//!
//! Status transitions are deliberately unconstrained: an admin may set any
//! status at any time. The constants exist so that other modules (feedback
//! eligibility, the db enum mapping) agree on the labels.

use crate::error::CoreError;
use crate::validation::require_non_blank;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Status of every newly created request.
pub const STATUS_OPEN: &str = "OPEN";
pub const STATUS_IN_PROGRESS: &str = "IN_PROGRESS";
pub const STATUS_RESOLVED: &str = "RESOLVED";
pub const STATUS_CLOSED: &str = "CLOSED";

/// All valid request statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_OPEN,
    STATUS_IN_PROGRESS,
    STATUS_RESOLVED,
    STATUS_CLOSED,
];

/// Statuses after which the owner may leave feedback.
pub const FEEDBACK_ELIGIBLE_STATUSES: &[&str] = &[STATUS_RESOLVED, STATUS_CLOSED];

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

/// Maximum length of a request title (characters).
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a request description (characters).
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

/// Validate title and description of a new request.
pub fn validate_content(title: &str, description: &str) -> Result<(), CoreError> {
    require_non_blank("title", title)?;
    require_non_blank("description", description)?;

    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Returns `true` if feedback may be left on a request with this status.
pub fn accepts_feedback(status: &str) -> bool {
    FEEDBACK_ELIGIBLE_STATUSES.contains(&status)
}
