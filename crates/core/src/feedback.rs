//! Feedback rating bounds.

use crate::error::CoreError;

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// Maximum length of a feedback comment (characters).
pub const MAX_COMMENT_LENGTH: usize = 2_000;

/// Validate that `rating` lies within `MIN_RATING..=MAX_RATING`.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING} (got {rating})"
        )));
    }
    Ok(())
}

/// Validate an optional comment's length.
pub fn validate_comment(comment: Option<&str>) -> Result<(), CoreError> {
    match comment {
        Some(c) if c.chars().count() > MAX_COMMENT_LENGTH => Err(CoreError::Validation(format!(
            "comment exceeds maximum length of {MAX_COMMENT_LENGTH} characters"
        ))),
        _ => Ok(()),
    }
}
