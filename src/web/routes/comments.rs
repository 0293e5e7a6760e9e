use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;

use crate::services::comment_service::{self, CommentView};
use crate::web::error::ApiError;
use crate::web::middleware::auth::AuthenticatedUser;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub text: String,
}

pub async fn list_comments_handler(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> Result<Json<Vec<CommentView>>, ApiError> {
    Ok(Json(
        comment_service::list_for_activity(&state.pool, &activity_id).await?,
    ))
}

pub async fn create_comment_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
    Json(body): Json<CommentBody>,
) -> Result<impl IntoResponse, ApiError> {
    let view = comment_service::create(&state.pool, &auth_user.id, &activity_id, &body.text).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn edit_comment_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    Json(body): Json<CommentBody>,
) -> Result<Json<CommentView>, ApiError> {
    Ok(Json(
        comment_service::edit(&state.pool, &auth_user, &comment_id, &body.text).await?,
    ))
}

pub async fn delete_comment_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    comment_service::soft_delete(&state.pool, &auth_user, &comment_id).await?;
    Ok(Json(json!({ "message": "Comment removed" })))
}
