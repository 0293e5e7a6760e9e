use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde_json::json;

use crate::models::{MarketItemRow, MarketItemWithSellerRow};
use crate::services::market_service::{self, MarketItemPayload};
use crate::web::error::ApiError;
use crate::web::middleware::auth::AuthenticatedUser;
use crate::web::state::AppState;

pub async fn list_items_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MarketItemWithSellerRow>>, ApiError> {
    Ok(Json(market_service::list(&state.pool).await?))
}

pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<MarketItemRow>, ApiError> {
    Ok(Json(market_service::get(&state.pool, &item_id).await?))
}

pub async fn create_item_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(payload): Json<MarketItemPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let item = market_service::create(&state.pool, &auth_user, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(payload): Json<MarketItemPayload>,
) -> Result<Json<MarketItemRow>, ApiError> {
    Ok(Json(
        market_service::update(&state.pool, &auth_user, &item_id, payload).await?,
    ))
}

pub async fn delete_item_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    market_service::delete(&state.pool, &auth_user, &item_id).await?;
    Ok(Json(json!({ "message": "Listing deleted" })))
}
