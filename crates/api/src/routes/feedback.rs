//! Route definitions for the `/feedback` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
///
/// ```text
/// GET  /    -> list (admin)
/// POST /    -> create (student)
/// GET  /my  -> list_mine (student)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(feedback::list).post(feedback::create))
        .route("/my", get(feedback::list_mine))
}
