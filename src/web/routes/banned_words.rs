use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;

use crate::models::BannedWordRow;
use crate::services::comment_service;
use crate::web::error::ApiError;
use crate::web::middleware::auth::{require_admin, AuthenticatedUser};
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BannedWordBody {
    pub word: String,
}

pub async fn list_banned_words_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BannedWordRow>>, ApiError> {
    require_admin(&auth_user)?;
    Ok(Json(comment_service::list_banned_words(&state.pool).await?))
}

pub async fn add_banned_word_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(body): Json<BannedWordBody>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&auth_user)?;
    let row = comment_service::add_banned_word(&state.pool, &body.word).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn remove_banned_word_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(word_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&auth_user)?;
    comment_service::remove_banned_word(&state.pool, &word_id).await?;
    Ok(Json(json!({ "message": "Banned word removed" })))
}
