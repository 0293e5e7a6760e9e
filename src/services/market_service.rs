use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::market_repo;
use crate::models::market_items::MARKET_CATEGORIES;
use crate::models::{MarketItemRow, MarketItemWithSellerRow, Role};
use crate::web::error::ApiError;
use crate::web::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize)]
pub struct MarketItemPayload {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub contact_info: String,
    pub image_url: Option<String>,
}

fn validate(payload: &MarketItemPayload) -> Result<(), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::Validation("Title is required".to_string()));
    }
    if !payload.price.is_finite() || payload.price < 0.0 {
        return Err(ApiError::Validation(
            "Price must be zero or positive".to_string(),
        ));
    }
    let category = payload.category.trim();
    if !MARKET_CATEGORIES.contains(&category) {
        return Err(ApiError::Validation(format!(
            "Unknown category \"{}\"",
            category
        )));
    }
    if payload.contact_info.trim().is_empty() {
        return Err(ApiError::Validation("Contact info is required".to_string()));
    }
    Ok(())
}

fn can_manage(requester: &AuthenticatedUser, seller_id: &str) -> bool {
    match requester.role {
        Role::Admin => true,
        Role::User => requester.id == seller_id,
    }
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<MarketItemWithSellerRow>, ApiError> {
    Ok(market_repo::list_items(pool).await?)
}

pub async fn get(pool: &SqlitePool, item_id: &str) -> Result<MarketItemRow, ApiError> {
    market_repo::load_item(pool, item_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Item not found".to_string()))
}

/// The seller is always the authenticated caller; a seller id in the request
/// body is never trusted.
pub async fn create(
    pool: &SqlitePool,
    seller: &AuthenticatedUser,
    payload: MarketItemPayload,
) -> Result<MarketItemRow, ApiError> {
    validate(&payload)?;
    let id = Uuid::new_v4().to_string();
    market_repo::insert_item(
        pool,
        market_repo::NewMarketItem {
            id: &id,
            seller_id: &seller.id,
            title: payload.title.trim(),
            description: payload.description.trim(),
            price: payload.price,
            category: payload.category.trim(),
            contact_info: payload.contact_info.trim(),
            image_url: payload.image_url.as_deref(),
        },
    )
    .await?;
    get(pool, &id).await
}

pub async fn update(
    pool: &SqlitePool,
    requester: &AuthenticatedUser,
    item_id: &str,
    payload: MarketItemPayload,
) -> Result<MarketItemRow, ApiError> {
    let item = get(pool, item_id).await?;
    if !can_manage(requester, &item.seller_id) {
        return Err(ApiError::Forbidden(
            "You may not edit this listing".to_string(),
        ));
    }
    validate(&payload)?;
    market_repo::update_item(
        pool,
        market_repo::MarketItemUpdate {
            id: item_id,
            title: payload.title.trim(),
            description: payload.description.trim(),
            price: payload.price,
            category: payload.category.trim(),
            contact_info: payload.contact_info.trim(),
            image_url: payload.image_url.as_deref(),
        },
    )
    .await?;
    get(pool, item_id).await
}

pub async fn delete(
    pool: &SqlitePool,
    requester: &AuthenticatedUser,
    item_id: &str,
) -> Result<(), ApiError> {
    let item = get(pool, item_id).await?;
    if !can_manage(requester, &item.seller_id) {
        return Err(ApiError::Forbidden(
            "You may not delete this listing".to_string(),
        ));
    }
    market_repo::delete_item(pool, item_id).await?;
    Ok(())
}
