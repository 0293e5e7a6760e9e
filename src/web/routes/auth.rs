use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::services::auth_service::{self, LoginRequest, LoginResponse, RegisterRequest};
use crate::web::error::ApiError;
use crate::web::state::AppState;

pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    auth_service::register(&state.pool, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Registration successful" })),
    ))
}

pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let response = auth_service::login(&state.pool, &state.auth, request).await?;
    Ok(Json(response))
}
