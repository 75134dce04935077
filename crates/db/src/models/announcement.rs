//! Announcement entity model and DTOs.

use helpdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::priority::Priority;

/// A row from the `announcements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: DbId,
    pub admin_id: DbId,
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub created_at: Timestamp,
    pub expires_at: Option<Timestamp>,
}

/// Body of `POST /announcements`. The author is taken from the access token.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncement {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 10000))]
    pub content: String,
    pub priority: Priority,
    pub expires_at: Option<Timestamp>,
}

/// Body of `PUT /announcements/{id}`. Only non-`None` fields are applied.
///
/// Sending `"expiresAt": null` removes the expiry.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncement {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 10000))]
    pub content: Option<String>,
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub expires_at: Option<Option<Timestamp>>,
}
