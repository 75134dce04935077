//! Repository for the `requests` table.

use helpdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::request::{CreateRequest, Request, UpdateRequest};

const COLUMNS: &str = "id, user_id, location_id, title, description, status, priority, \
                       created_at, updated_at";

/// The request ledger.
pub struct RequestRepo;

impl RequestRepo {
    /// Insert a new request owned by `user_id`.
    ///
    /// The status column defaults to `OPEN`; `input.status` is never written.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateRequest,
    ) -> Result<Request, sqlx::Error> {
        let query = format!(
            "INSERT INTO requests (user_id, location_id, title, description, priority)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(user_id)
            .bind(input.location_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.priority)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Request>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM requests WHERE id = $1");
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every request, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Request>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM requests ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Request>(&query).fetch_all(pool).await
    }

    /// List the requests owned by `user_id`, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Request>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM requests
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply an admin update. Only `status` and `priority` are written.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRequest,
    ) -> Result<Option<Request>, sqlx::Error> {
        let query = format!(
            "UPDATE requests SET
                status = COALESCE($2, status),
                priority = COALESCE($3, priority)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .bind(input.status)
            .bind(input.priority)
            .fetch_optional(pool)
            .await
    }

    /// Delete a request and its feedback. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM requests")
            .fetch_one(pool)
            .await
    }
}
