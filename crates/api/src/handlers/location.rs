//! Handlers for the `/locations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use helpdesk_core::error::CoreError;
use helpdesk_core::location::{
    validate_coordinates, validate_latitude, validate_longitude, validate_opening_hours,
};
use helpdesk_core::types::DbId;
use helpdesk_core::validation::{require_non_blank, validate_input};
use helpdesk_db::models::location::{CampusLocation, CreateLocation, UpdateLocation};
use helpdesk_db::repositories::LocationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "CampusLocation",
        id,
    })
}

/// GET /locations
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<CampusLocation>>> {
    let locations = LocationRepo::list(&state.pool).await?;
    Ok(Json(locations))
}

/// GET /locations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<CampusLocation>> {
    let location = LocationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(location))
}

/// POST /locations
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<CampusLocation>)> {
    validate_input(&input)?;
    require_non_blank("name", &input.name)?;
    validate_coordinates(input.latitude, input.longitude)?;

    let location = LocationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        location_id = location.id,
        admin_id = admin.user_id,
        name = %location.name,
        "Location created"
    );
    Ok((StatusCode::CREATED, Json(location)))
}

/// PUT /locations/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLocation>,
) -> AppResult<Json<CampusLocation>> {
    validate_input(&input)?;
    if let Some(name) = &input.name {
        require_non_blank("name", name)?;
    }
    if let Some(latitude) = input.latitude {
        validate_latitude(latitude)?;
    }
    if let Some(longitude) = input.longitude {
        validate_longitude(longitude)?;
    }
    if let Some(opening_hours) = &input.opening_hours {
        validate_opening_hours(opening_hours.as_deref())?;
    }

    let location = LocationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(location_id = id, admin_id = admin.user_id, "Location updated");
    Ok(Json(location))
}

/// DELETE /locations/{id}
///
/// Requests filed against the location are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !LocationRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(location_id = id, admin_id = admin.user_id, "Location deleted");
    Ok(StatusCode::NO_CONTENT)
}
