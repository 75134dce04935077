//! Route definitions for the `/requests` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::request;
use crate::state::AppState;

/// Routes mounted at `/requests`.
///
/// ```text
/// GET    /               -> list_all
/// POST   /               -> create
/// GET    /my             -> list_mine
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/feedback  -> list_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(request::list_all).post(request::create))
        .route("/my", get(request::list_mine))
        .route(
            "/{id}",
            get(request::get_by_id)
                .put(request::update)
                .delete(request::delete),
        )
        .route("/{id}/feedback", get(request::list_feedback))
}
