pub mod announcement;
pub mod auth;
pub mod feedback;
pub mod health;
pub mod location;
pub mod request;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/me                       current user
///
/// /requests                      list all (admin), create (student)
/// /requests/my                   caller's requests (student)
/// /requests/{id}                 get, update (admin), delete (admin)
/// /requests/{id}/feedback        feedback for one request (admin)
///
/// /locations                     list, create (admin)
/// /locations/{id}                get, update (admin), delete (admin)
///
/// /feedback                      list (admin), submit (student)
/// /feedback/my                   caller's feedback (student)
///
/// /announcements                 list, create (admin)
/// /announcements/{id}            get, update (admin), delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/requests", request::router())
        .nest("/locations", location::router())
        .nest("/feedback", feedback::router())
        .nest("/announcements", announcement::router())
}
