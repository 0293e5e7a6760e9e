use serde::Serialize;

/// Categories a listing can be filed under.
pub const MARKET_CATEGORIES: &[&str] = &["food", "crafts", "secondhand", "services", "other"];

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct MarketItemRow {
    pub id: String,
    pub seller_id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub contact_info: String,
    pub image_url: Option<String>,
    pub created_at: String,
}

/// Listing joined with the seller's public contact fields.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct MarketItemWithSellerRow {
    pub id: String,
    pub seller_id: String,
    pub seller_username: String,
    pub seller_phone: Option<String>,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub contact_info: String,
    pub image_url: Option<String>,
    pub created_at: String,
}
