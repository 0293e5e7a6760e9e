/// Lifecycle of a comment as a tagged variant. Deleted is terminal: the raw
/// text stays in storage for audit but is unreachable through this type, so
/// no render path can leak it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentContent {
    Active { text: String, edited: bool },
    Deleted,
}

fn content_of(is_deleted: i64, is_edited: i64, text: &str) -> CommentContent {
    if is_deleted != 0 {
        CommentContent::Deleted
    } else {
        CommentContent::Active {
            text: text.to_string(),
            edited: is_edited != 0,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRow {
    pub id: String,
    pub user_id: String,
    pub activity_id: String,
    pub text: String,
    pub is_deleted: i64,
    pub is_edited: i64,
    pub created_at: String,
}

impl CommentRow {
    pub fn content(&self) -> CommentContent {
        content_of(self.is_deleted, self.is_edited, &self.text)
    }
}

/// Comment joined with the author's display name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentWithAuthorRow {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub activity_id: String,
    pub text: String,
    pub is_deleted: i64,
    pub is_edited: i64,
    pub created_at: String,
}

impl CommentWithAuthorRow {
    pub fn content(&self) -> CommentContent {
        content_of(self.is_deleted, self.is_edited, &self.text)
    }
}
