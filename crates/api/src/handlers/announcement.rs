//! Handlers for the `/announcements` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use helpdesk_core::announcement::is_active;
use helpdesk_core::error::CoreError;
use helpdesk_core::types::DbId;
use helpdesk_core::validation::{require_non_blank, validate_input};
use helpdesk_db::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};
use helpdesk_db::repositories::AnnouncementRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Announcement",
        id,
    })
}

/// GET /announcements
///
/// Admins see every announcement; students only those not yet expired.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Announcement>>> {
    let announcements = if user.is_admin() {
        AnnouncementRepo::list(&state.pool).await?
    } else {
        AnnouncementRepo::list_active(&state.pool).await?
    };
    Ok(Json(announcements))
}

/// GET /announcements/{id}
///
/// An expired announcement is reported as missing to students.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Announcement>> {
    let announcement = AnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if !user.is_admin() && !is_active(announcement.expires_at, Utc::now()) {
        return Err(not_found(id));
    }
    Ok(Json(announcement))
}

/// POST /announcements
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateAnnouncement>,
) -> AppResult<(StatusCode, Json<Announcement>)> {
    validate_input(&input)?;
    require_non_blank("title", &input.title)?;
    require_non_blank("content", &input.content)?;

    let announcement = AnnouncementRepo::create(&state.pool, admin.user_id, &input).await?;

    tracing::info!(
        announcement_id = announcement.id,
        admin_id = admin.user_id,
        priority = announcement.priority.as_str(),
        "Announcement published"
    );
    Ok((StatusCode::CREATED, Json(announcement)))
}

/// PUT /announcements/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnnouncement>,
) -> AppResult<Json<Announcement>> {
    validate_input(&input)?;
    if let Some(title) = &input.title {
        require_non_blank("title", title)?;
    }
    if let Some(content) = &input.content {
        require_non_blank("content", content)?;
    }

    let announcement = AnnouncementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(announcement_id = id, admin_id = admin.user_id, "Announcement updated");
    Ok(Json(announcement))
}

/// DELETE /announcements/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !AnnouncementRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(announcement_id = id, admin_id = admin.user_id, "Announcement deleted");
    Ok(StatusCode::NO_CONTENT)
}
