use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde_json::json;

use crate::models::AccountRow;
use crate::services::account_service::{self, UpdateAccountRequest};
use crate::web::error::ApiError;
use crate::web::middleware::auth::{require_admin, AuthenticatedUser};
use crate::web::state::AppState;

pub async fn list_users_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountRow>>, ApiError> {
    require_admin(&auth_user)?;
    Ok(Json(account_service::list(&state.pool).await?))
}

pub async fn get_user_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<AccountRow>, ApiError> {
    require_admin(&auth_user)?;
    Ok(Json(account_service::get(&state.pool, &user_id).await?))
}

pub async fn update_user_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<Json<AccountRow>, ApiError> {
    require_admin(&auth_user)?;
    Ok(Json(
        account_service::update(&state.pool, &user_id, request).await?,
    ))
}

pub async fn delete_user_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&auth_user)?;
    account_service::delete(&state.pool, &auth_user, &user_id).await?;
    Ok(Json(
        json!({ "message": "User and related records deleted" }),
    ))
}
