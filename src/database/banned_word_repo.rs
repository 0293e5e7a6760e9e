use sqlx::SqlitePool;

use crate::models::BannedWordRow;

const SQL_LIST_BANNED_WORDS: &str = r#"
SELECT id, word
FROM banned_words
ORDER BY word ASC
"#;

const SQL_LIST_WORDS: &str = "SELECT word FROM banned_words";

const SQL_INSERT_BANNED_WORD: &str = r#"
INSERT INTO banned_words (id, word)
VALUES (?, ?)
"#;

const SQL_DELETE_BANNED_WORD: &str = "DELETE FROM banned_words WHERE id = ?";

pub async fn list_banned_words(pool: &SqlitePool) -> sqlx::Result<Vec<BannedWordRow>> {
    sqlx::query_as::<_, BannedWordRow>(SQL_LIST_BANNED_WORDS)
        .fetch_all(pool)
        .await
}

/// Just the words, for the per-comment containment scan.
pub async fn list_words(pool: &SqlitePool) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar(SQL_LIST_WORDS).fetch_all(pool).await
}

pub async fn insert_banned_word(pool: &SqlitePool, id: &str, word: &str) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_BANNED_WORD)
        .bind(id)
        .bind(word)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete_banned_word(pool: &SqlitePool, word_id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_BANNED_WORD)
        .bind(word_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
