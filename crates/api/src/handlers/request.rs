//! Handlers for the `/requests` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use helpdesk_core::error::CoreError;
use helpdesk_core::request::validate_content;
use helpdesk_core::types::DbId;
use helpdesk_db::models::feedback::Feedback;
use helpdesk_db::models::request::{CreateRequest, Request, UpdateRequest};
use helpdesk_db::repositories::{FeedbackRepo, LocationRepo, RequestRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireStudent};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Request",
        id,
    })
}

/// GET /requests
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Request>>> {
    let requests = RequestRepo::list(&state.pool).await?;
    Ok(Json(requests))
}

/// GET /requests/my
pub async fn list_mine(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
) -> AppResult<Json<Vec<Request>>> {
    let requests = RequestRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(Json(requests))
}

/// POST /requests
///
/// The caller becomes the owner and the request always starts `OPEN`.
pub async fn create(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
    Json(input): Json<CreateRequest>,
) -> AppResult<Json<Request>> {
    validate_content(&input.title, &input.description)?;

    if !LocationRepo::exists(&state.pool, input.location_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CampusLocation",
            id: input.location_id,
        }));
    }

    let request = RequestRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        request_id = request.id,
        user_id = user.user_id,
        location_id = request.location_id,
        priority = request.priority.as_str(),
        "Request created"
    );
    Ok(Json(request))
}

/// GET /requests/{id}
///
/// Admins may read any request; students only their own.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Request>> {
    let request = RequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if !user.is_admin() && request.user_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only view your own requests".into(),
        )));
    }
    Ok(Json(request))
}

/// PUT /requests/{id}
///
/// Applies `status` and `priority`; the other fields in the body are ignored.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRequest>,
) -> AppResult<Json<Request>> {
    let request = RequestRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        request_id = id,
        admin_id = admin.user_id,
        status = request.status.as_str(),
        priority = request.priority.as_str(),
        "Request updated"
    );
    Ok(Json(request))
}

/// DELETE /requests/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !RequestRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(request_id = id, admin_id = admin.user_id, "Request deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /requests/{id}/feedback
pub async fn list_feedback(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Feedback>>> {
    if RequestRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }
    let feedback = FeedbackRepo::list_by_request(&state.pool, id).await?;
    Ok(Json(feedback))
}
