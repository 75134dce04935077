//! Help-desk request entity model and DTOs.

use helpdesk_core::request;
use helpdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::priority::Priority;

/// Maps to the Postgres `request_status` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Open => request::STATUS_OPEN,
            RequestStatus::InProgress => request::STATUS_IN_PROGRESS,
            RequestStatus::Resolved => request::STATUS_RESOLVED,
            RequestStatus::Closed => request::STATUS_CLOSED,
        }
    }
}

/// A row from the `requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: DbId,
    pub user_id: DbId,
    pub location_id: DbId,
    pub title: String,
    pub description: String,
    pub status: RequestStatus,
    pub priority: Priority,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /requests`.
///
/// `status` is accepted for symmetry with the update body but ignored:
/// new requests always start out `OPEN`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Option<RequestStatus>,
    pub location_id: DbId,
}

/// Body of `PUT /requests/{id}`.
///
/// Only `status` and `priority` are applied; the remaining fields are
/// accepted so clients can send the full request shape.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<RequestStatus>,
    pub location_id: Option<DbId>,
}
