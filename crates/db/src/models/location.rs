//! Campus location entity model and DTOs.

use helpdesk_core::location;
use helpdesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Maps to the Postgres `location_type` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "location_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    Academic,
    Residential,
    Services,
    Library,
    Cafeteria,
    Sports,
}

impl LocationType {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationType::Academic => location::TYPE_ACADEMIC,
            LocationType::Residential => location::TYPE_RESIDENTIAL,
            LocationType::Services => location::TYPE_SERVICES,
            LocationType::Library => location::TYPE_LIBRARY,
            LocationType::Cafeteria => location::TYPE_CAFETERIA,
            LocationType::Sports => location::TYPE_SPORTS,
        }
    }
}

/// A row from the `campus_locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusLocation {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub opening_hours: Option<String>,
    #[serde(rename = "type")]
    pub location_type: LocationType,
}

/// DTO for creating a location.
///
/// Coordinate ranges are checked with
/// [`helpdesk_core::location::validate_coordinates`].
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocation {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[validate(length(max = 200))]
    pub opening_hours: Option<String>,
    #[serde(rename = "type")]
    pub location_type: LocationType,
}

/// DTO for updating a location. Only non-`None` fields are applied.
///
/// `description` and `openingHours` can be cleared by sending `null`.
/// The length of `openingHours` is checked with
/// [`helpdesk_core::location::validate_opening_hours`].
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocation {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub description: Option<Option<String>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub opening_hours: Option<Option<String>>,
    #[serde(rename = "type")]
    pub location_type: Option<LocationType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_uses_type_key() {
        let body = r#"{
            "name": "Main Library",
            "latitude": 12.97,
            "longitude": 77.59,
            "openingHours": "08:00-22:00",
            "type": "LIBRARY"
        }"#;
        let input: CreateLocation = serde_json::from_str(body).unwrap();
        assert_eq!(input.location_type, LocationType::Library);
        assert_eq!(input.opening_hours.as_deref(), Some("08:00-22:00"));
        assert!(input.description.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn empty_name_fails_validation() {
        let input = CreateLocation {
            name: String::new(),
            description: None,
            latitude: 12.9,
            longitude: 77.5,
            opening_hours: None,
            location_type: LocationType::Sports,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn enum_labels_match_core_constants() {
        assert_eq!(LocationType::Cafeteria.as_str(), location::TYPE_CAFETERIA);
        let json = serde_json::to_string(&LocationType::Residential).unwrap();
        assert_eq!(json, format!("\"{}\"", location::TYPE_RESIDENTIAL));
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let input: UpdateLocation =
            serde_json::from_str(r#"{"name": "Annex", "openingHours": null}"#).unwrap();
        assert!(input.description.is_none());
        assert_eq!(input.opening_hours, Some(None));

        let input: UpdateLocation =
            serde_json::from_str(r#"{"description": "Ground floor"}"#).unwrap();
        assert_eq!(input.description, Some(Some("Ground floor".to_string())));
        assert!(input.opening_hours.is_none());
    }
}
