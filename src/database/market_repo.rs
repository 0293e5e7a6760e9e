use sqlx::SqlitePool;

use crate::models::{MarketItemRow, MarketItemWithSellerRow};

const SQL_INSERT_ITEM: &str = r#"
INSERT INTO market_items (id, seller_id, title, description, price, category, contact_info, image_url)
VALUES (?, ?, ?, ?, ?, ?, ?, ?)
"#;

const SQL_LOAD_ITEM: &str = r#"
SELECT id, seller_id, title, description, price, category, contact_info, image_url, created_at
FROM market_items
WHERE id = ?
LIMIT 1
"#;

const SQL_LIST_ITEMS: &str = r#"
SELECT
  m.id,
  m.seller_id,
  u.username AS seller_username,
  u.phone AS seller_phone,
  m.title,
  m.description,
  m.price,
  m.category,
  m.contact_info,
  m.image_url,
  m.created_at
FROM market_items m
JOIN accounts u ON u.id = m.seller_id
ORDER BY m.created_at DESC, m.rowid DESC
"#;

const SQL_UPDATE_ITEM: &str = r#"
UPDATE market_items
SET title = ?, description = ?, price = ?, category = ?, contact_info = ?, image_url = ?
WHERE id = ?
"#;

const SQL_DELETE_ITEM: &str = "DELETE FROM market_items WHERE id = ?";

pub struct NewMarketItem<'a> {
    pub id: &'a str,
    pub seller_id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub category: &'a str,
    pub contact_info: &'a str,
    pub image_url: Option<&'a str>,
}

pub async fn insert_item(pool: &SqlitePool, item: NewMarketItem<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_ITEM)
        .bind(item.id)
        .bind(item.seller_id)
        .bind(item.title)
        .bind(item.description)
        .bind(item.price)
        .bind(item.category)
        .bind(item.contact_info)
        .bind(item.image_url)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn load_item(pool: &SqlitePool, item_id: &str) -> sqlx::Result<Option<MarketItemRow>> {
    sqlx::query_as::<_, MarketItemRow>(SQL_LOAD_ITEM)
        .bind(item_id)
        .fetch_optional(pool)
        .await
}

pub async fn list_items(pool: &SqlitePool) -> sqlx::Result<Vec<MarketItemWithSellerRow>> {
    sqlx::query_as::<_, MarketItemWithSellerRow>(SQL_LIST_ITEMS)
        .fetch_all(pool)
        .await
}

pub struct MarketItemUpdate<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub category: &'a str,
    pub contact_info: &'a str,
    pub image_url: Option<&'a str>,
}

pub async fn update_item(pool: &SqlitePool, item: MarketItemUpdate<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_ITEM)
        .bind(item.title)
        .bind(item.description)
        .bind(item.price)
        .bind(item.category)
        .bind(item.contact_info)
        .bind(item.image_url)
        .bind(item.id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_item(pool: &SqlitePool, item_id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_ITEM)
        .bind(item_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
