//! Route definitions for the `/announcements` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::announcement;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(announcement::list).post(announcement::create))
        .route(
            "/{id}",
            get(announcement::get_by_id)
                .put(announcement::update)
                .delete(announcement::delete),
        )
}
