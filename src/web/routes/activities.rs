use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde_json::json;

use crate::models::ActivityRow;
use crate::services::activity_service::{self, ActivityPayload};
use crate::web::error::ApiError;
use crate::web::middleware::auth::{require_admin, AuthenticatedUser};
use crate::web::state::AppState;

pub async fn list_activities_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityRow>>, ApiError> {
    Ok(Json(activity_service::list(&state.pool).await?))
}

pub async fn get_activity_handler(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> Result<Json<ActivityRow>, ApiError> {
    Ok(Json(activity_service::get(&state.pool, &activity_id).await?))
}

pub async fn create_activity_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(payload): Json<ActivityPayload>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&auth_user)?;
    let activity = activity_service::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

pub async fn update_activity_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
    Json(payload): Json<ActivityPayload>,
) -> Result<Json<ActivityRow>, ApiError> {
    require_admin(&auth_user)?;
    Ok(Json(
        activity_service::update(&state.pool, &activity_id, payload).await?,
    ))
}

pub async fn delete_activity_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&auth_user)?;
    activity_service::delete(&state.pool, &activity_id).await?;
    Ok(Json(json!({ "message": "Activity deleted" })))
}
