//! Campus location type labels and coordinate checks.

use crate::error::CoreError;

pub const TYPE_ACADEMIC: &str = "ACADEMIC";
pub const TYPE_RESIDENTIAL: &str = "RESIDENTIAL";
pub const TYPE_SERVICES: &str = "SERVICES";
pub const TYPE_LIBRARY: &str = "LIBRARY";
pub const TYPE_CAFETERIA: &str = "CAFETERIA";
pub const TYPE_SPORTS: &str = "SPORTS";

/// All valid location types, in declaration order of the `location_type` enum.
pub const VALID_TYPES: &[&str] = &[
    TYPE_ACADEMIC,
    TYPE_RESIDENTIAL,
    TYPE_SERVICES,
    TYPE_LIBRARY,
    TYPE_CAFETERIA,
    TYPE_SPORTS,
];

/// Validate a latitude in decimal degrees.
pub fn validate_latitude(latitude: f64) -> Result<(), CoreError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(CoreError::Validation(format!(
            "latitude must be between -90 and 90 (got {latitude})"
        )));
    }
    Ok(())
}

/// Validate a longitude in decimal degrees.
pub fn validate_longitude(longitude: f64) -> Result<(), CoreError> {
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(CoreError::Validation(format!(
            "longitude must be between -180 and 180 (got {longitude})"
        )));
    }
    Ok(())
}

/// Maximum length of the free-text opening hours (characters).
pub const MAX_OPENING_HOURS_LENGTH: usize = 200;

pub fn validate_opening_hours(opening_hours: Option<&str>) -> Result<(), CoreError> {
    match opening_hours {
        Some(h) if h.chars().count() > MAX_OPENING_HOURS_LENGTH => Err(CoreError::Validation(
            format!("openingHours exceeds maximum length of {MAX_OPENING_HOURS_LENGTH} characters"),
        )),
        _ => Ok(()),
    }
}

/// Validate a latitude/longitude pair in decimal degrees.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), CoreError> {
    validate_latitude(latitude)?;
    validate_longitude(longitude)
}
