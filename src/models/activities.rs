use serde::Serialize;

/// Categories an activity can be filed under.
pub const ACTIVITY_CATEGORIES: &[&str] = &["health", "recreation", "dharma", "crafts", "other"];

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ActivityRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub location: String,
    pub max_participants: i64,
    pub current_participants: i64,
    pub created_at: String,
}
