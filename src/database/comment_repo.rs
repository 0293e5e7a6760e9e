use sqlx::SqlitePool;

use crate::models::{CommentRow, CommentWithAuthorRow};

const SQL_INSERT_COMMENT: &str = r#"
INSERT INTO comments (id, user_id, activity_id, text)
VALUES (?, ?, ?, ?)
"#;

const SQL_LOAD_COMMENT: &str = r#"
SELECT id, user_id, activity_id, text, is_deleted, is_edited, created_at
FROM comments
WHERE id = ?
LIMIT 1
"#;

const SQL_LOAD_WITH_AUTHOR: &str = r#"
SELECT
  c.id,
  c.user_id,
  u.username,
  c.activity_id,
  c.text,
  c.is_deleted,
  c.is_edited,
  c.created_at
FROM comments c
JOIN accounts u ON u.id = c.user_id
WHERE c.id = ?
LIMIT 1
"#;

const SQL_LIST_FOR_ACTIVITY: &str = r#"
SELECT
  c.id,
  c.user_id,
  u.username,
  c.activity_id,
  c.text,
  c.is_deleted,
  c.is_edited,
  c.created_at
FROM comments c
JOIN accounts u ON u.id = c.user_id
WHERE c.activity_id = ?
ORDER BY c.created_at DESC, c.rowid DESC
"#;

const SQL_UPDATE_TEXT: &str = r#"
UPDATE comments
SET text = ?, is_edited = 1
WHERE id = ?
"#;

const SQL_MARK_DELETED: &str = r#"
UPDATE comments
SET is_deleted = 1
WHERE id = ?
"#;

pub async fn insert_comment(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    activity_id: &str,
    text: &str,
) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_COMMENT)
        .bind(id)
        .bind(user_id)
        .bind(activity_id)
        .bind(text)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn load_comment(pool: &SqlitePool, comment_id: &str) -> sqlx::Result<Option<CommentRow>> {
    sqlx::query_as::<_, CommentRow>(SQL_LOAD_COMMENT)
        .bind(comment_id)
        .fetch_optional(pool)
        .await
}

pub async fn load_with_author(
    pool: &SqlitePool,
    comment_id: &str,
) -> sqlx::Result<Option<CommentWithAuthorRow>> {
    sqlx::query_as::<_, CommentWithAuthorRow>(SQL_LOAD_WITH_AUTHOR)
        .bind(comment_id)
        .fetch_optional(pool)
        .await
}

pub async fn list_for_activity(
    pool: &SqlitePool,
    activity_id: &str,
) -> sqlx::Result<Vec<CommentWithAuthorRow>> {
    sqlx::query_as::<_, CommentWithAuthorRow>(SQL_LIST_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_all(pool)
        .await
}

pub async fn update_comment_text(
    pool: &SqlitePool,
    comment_id: &str,
    text: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_TEXT)
        .bind(text)
        .bind(comment_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn mark_comment_deleted(pool: &SqlitePool, comment_id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_MARK_DELETED)
        .bind(comment_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
