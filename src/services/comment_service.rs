use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::{
    activity_repo, banned_word_repo, comment_repo, is_unique_violation,
};
use crate::models::{BannedWordRow, CommentContent, CommentWithAuthorRow, Role};
use crate::web::error::ApiError;
use crate::web::middleware::auth::AuthenticatedUser;

/// What end users see in place of a soft-deleted comment's text.
pub const REMOVED_PLACEHOLDER: &str = "[removed]";

#[derive(Debug, Serialize)]
pub struct CommentView {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub activity_id: String,
    pub text: String,
    pub is_deleted: bool,
    pub is_edited: bool,
    pub created_at: String,
}

// The view is built from the tagged content, never from the raw row text, so
// a deleted comment cannot leak what it said.
fn build_view(row: CommentWithAuthorRow) -> CommentView {
    let content = row.content();
    let (text, is_deleted, is_edited) = match content {
        CommentContent::Active { text, edited } => (text, false, edited),
        CommentContent::Deleted => (REMOVED_PLACEHOLDER.to_string(), true, false),
    };
    CommentView {
        id: row.id,
        user_id: row.user_id,
        username: row.username,
        activity_id: row.activity_id,
        text,
        is_deleted,
        is_edited,
        created_at: row.created_at,
    }
}

/// Case-sensitive containment scan over the whole banned-word list. O(N·W),
/// fine while the list stays small.
fn find_banned_word<'a>(text: &str, words: &'a [String]) -> Option<&'a str> {
    words
        .iter()
        .find(|word| !word.is_empty() && text.contains(word.as_str()))
        .map(|word| word.as_str())
}

async fn reject_profane(pool: &SqlitePool, text: &str) -> Result<(), ApiError> {
    let words = banned_word_repo::list_words(pool).await?;
    if let Some(word) = find_banned_word(text, &words) {
        return Err(ApiError::ProfaneContent(word.to_string()));
    }
    Ok(())
}

pub async fn create(
    pool: &SqlitePool,
    user_id: &str,
    activity_id: &str,
    text: &str,
) -> Result<CommentView, ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::Validation("Comment text is required".to_string()));
    }
    let mut conn = pool.acquire().await?;
    if !activity_repo::activity_exists(&mut conn, activity_id).await? {
        return Err(ApiError::NotFound("Activity not found".to_string()));
    }
    drop(conn);

    reject_profane(pool, text).await?;

    let id = Uuid::new_v4().to_string();
    comment_repo::insert_comment(pool, &id, user_id, activity_id, text).await?;
    let row = comment_repo::load_with_author(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Comment not found".to_string()))?;
    Ok(build_view(row))
}

/// Author-only. Admins may remove another user's comment but not rewrite it.
pub async fn edit(
    pool: &SqlitePool,
    requester: &AuthenticatedUser,
    comment_id: &str,
    new_text: &str,
) -> Result<CommentView, ApiError> {
    if new_text.trim().is_empty() {
        return Err(ApiError::Validation("Comment text is required".to_string()));
    }

    let row = comment_repo::load_comment(pool, comment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Comment not found".to_string()))?;

    if row.user_id != requester.id {
        return Err(ApiError::Forbidden(
            "You may only edit your own comments".to_string(),
        ));
    }
    if row.content() == CommentContent::Deleted {
        // Deleted is terminal; to its author the comment is gone.
        return Err(ApiError::NotFound("Comment not found".to_string()));
    }

    reject_profane(pool, new_text).await?;

    comment_repo::update_comment_text(pool, comment_id, new_text).await?;
    let row = comment_repo::load_with_author(pool, comment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Comment not found".to_string()))?;
    Ok(build_view(row))
}

/// Author or admin. Re-deleting an already-deleted comment is a no-op that
/// reports the same terminal state.
pub async fn soft_delete(
    pool: &SqlitePool,
    requester: &AuthenticatedUser,
    comment_id: &str,
) -> Result<(), ApiError> {
    let row = comment_repo::load_comment(pool, comment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Comment not found".to_string()))?;

    let allowed = match requester.role {
        Role::Admin => true,
        Role::User => row.user_id == requester.id,
    };
    if !allowed {
        return Err(ApiError::Forbidden(
            "You may not delete this comment".to_string(),
        ));
    }

    if row.content() == CommentContent::Deleted {
        return Ok(());
    }
    comment_repo::mark_comment_deleted(pool, comment_id).await?;
    Ok(())
}

pub async fn list_for_activity(
    pool: &SqlitePool,
    activity_id: &str,
) -> Result<Vec<CommentView>, ApiError> {
    let rows = comment_repo::list_for_activity(pool, activity_id).await?;
    Ok(rows.into_iter().map(build_view).collect())
}

// Banned-word administration. The list is flat and admin-maintained; the
// moderation scan above consults it on every create/edit.

pub async fn list_banned_words(pool: &SqlitePool) -> Result<Vec<BannedWordRow>, ApiError> {
    Ok(banned_word_repo::list_banned_words(pool).await?)
}

pub async fn add_banned_word(pool: &SqlitePool, word: &str) -> Result<BannedWordRow, ApiError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(ApiError::Validation("Word is required".to_string()));
    }
    let id = Uuid::new_v4().to_string();
    match banned_word_repo::insert_banned_word(pool, &id, word).await {
        Ok(()) => Ok(BannedWordRow {
            id,
            word: word.to_string(),
        }),
        Err(e) if is_unique_violation(&e) => Err(ApiError::Conflict(
            "This word is already banned".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

pub async fn remove_banned_word(pool: &SqlitePool, word_id: &str) -> Result<(), ApiError> {
    let deleted = banned_word_repo::delete_banned_word(pool, word_id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Banned word not found".to_string()));
    }
    Ok(())
}
