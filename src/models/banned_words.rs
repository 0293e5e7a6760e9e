use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct BannedWordRow {
    pub id: String,
    pub word: String,
}
