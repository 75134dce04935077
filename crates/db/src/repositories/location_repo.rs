//! Repository for the `campus_locations` table.

use helpdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::location::{CampusLocation, CreateLocation, UpdateLocation};

const COLUMNS: &str = "id, name, description, latitude, longitude, opening_hours, location_type";

/// Provides CRUD operations for campus locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Insert a new location, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLocation,
    ) -> Result<CampusLocation, sqlx::Error> {
        let query = format!(
            "INSERT INTO campus_locations
                (name, description, latitude, longitude, opening_hours, location_type)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CampusLocation>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.opening_hours)
            .bind(input.location_type)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CampusLocation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campus_locations WHERE id = $1");
        sqlx::query_as::<_, CampusLocation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM campus_locations WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all locations ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<CampusLocation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campus_locations ORDER BY name, id");
        sqlx::query_as::<_, CampusLocation>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a location. Only non-`None` fields in `input` are applied.
    ///
    /// `description` and `opening_hours` are `Option<Option<_>>` so they can
    /// be cleared.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLocation,
    ) -> Result<Option<CampusLocation>, sqlx::Error> {
        let query = format!(
            "UPDATE campus_locations SET
                name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                latitude = COALESCE($5, latitude),
                longitude = COALESCE($6, longitude),
                opening_hours = CASE WHEN $7 THEN $8 ELSE opening_hours END,
                location_type = COALESCE($9, location_type)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CampusLocation>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.opening_hours.is_some())
            .bind(input.opening_hours.as_ref().and_then(|v| v.as_deref()))
            .bind(input.location_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a location and, through the foreign keys, its requests.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campus_locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
