//! Handlers for the `/feedback` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use helpdesk_core::error::CoreError;
use helpdesk_core::feedback::{validate_comment, validate_rating};
use helpdesk_core::request::accepts_feedback;
use helpdesk_db::models::feedback::{CreateFeedback, Feedback};
use helpdesk_db::repositories::{FeedbackRepo, RequestRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireStudent};
use crate::state::AppState;

/// POST /feedback
///
/// Students rate their own requests once the request is resolved or closed.
pub async fn create(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
    Json(input): Json<CreateFeedback>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    validate_rating(input.rating)?;
    validate_comment(input.comment.as_deref())?;

    let request = RequestRepo::find_by_id(&state.pool, input.request_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Request",
            id: input.request_id,
        }))?;

    if request.user_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only leave feedback on your own requests".into(),
        )));
    }
    if !accepts_feedback(request.status.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Feedback requires a RESOLVED or CLOSED request (current status: {})",
            request.status.as_str()
        ))));
    }

    let feedback = FeedbackRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        feedback_id = feedback.id,
        request_id = feedback.request_id,
        user_id = user.user_id,
        rating = feedback.rating,
        "Feedback submitted"
    );
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// GET /feedback
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Feedback>>> {
    let feedback = FeedbackRepo::list(&state.pool).await?;
    Ok(Json(feedback))
}

/// GET /feedback/my
pub async fn list_mine(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
) -> AppResult<Json<Vec<Feedback>>> {
    let feedback = FeedbackRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(Json(feedback))
}
