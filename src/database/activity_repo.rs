use sqlx::{SqliteConnection, SqlitePool};

use crate::models::ActivityRow;

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT
  id, title, description, category, date, location,
  max_participants, current_participants, created_at
FROM activities
ORDER BY date ASC, rowid ASC
"#;

const SQL_LOAD_ACTIVITY: &str = r#"
SELECT
  id, title, description, category, date, location,
  max_participants, current_participants, created_at
FROM activities
WHERE id = ?
LIMIT 1
"#;

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (id, title, description, category, date, location, max_participants)
VALUES (?, ?, ?, ?, ?, ?, ?)
"#;

// The participant counter is owned by the booking ledger and is deliberately
// not touched here.
const SQL_UPDATE_ACTIVITY: &str = r#"
UPDATE activities
SET title = ?, description = ?, category = ?, date = ?, location = ?, max_participants = ?
WHERE id = ?
"#;

const SQL_DELETE_ACTIVITY: &str = "DELETE FROM activities WHERE id = ?";

const SQL_ACTIVITY_EXISTS: &str = "SELECT 1 FROM activities WHERE id = ? LIMIT 1";

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(pool)
        .await
}

pub async fn load_activity(pool: &SqlitePool, activity_id: &str) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LOAD_ACTIVITY)
        .bind(activity_id)
        .fetch_optional(pool)
        .await
}

pub struct NewActivity<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub date: &'a str,
    pub location: &'a str,
    pub max_participants: i64,
}

pub async fn insert_activity(pool: &SqlitePool, activity: NewActivity<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.id)
        .bind(activity.title)
        .bind(activity.description)
        .bind(activity.category)
        .bind(activity.date)
        .bind(activity.location)
        .bind(activity.max_participants)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn update_activity(
    pool: &SqlitePool,
    activity: NewActivity<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_ACTIVITY)
        .bind(activity.title)
        .bind(activity.description)
        .bind(activity.category)
        .bind(activity.date)
        .bind(activity.location)
        .bind(activity.max_participants)
        .bind(activity.id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_activity(pool: &SqlitePool, activity_id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_ACTIVITY)
        .bind(activity_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn activity_exists(conn: &mut SqliteConnection, activity_id: &str) -> sqlx::Result<bool> {
    let row: Option<(i64,)> = sqlx::query_as(SQL_ACTIVITY_EXISTS)
        .bind(activity_id)
        .fetch_optional(conn)
        .await?;
    Ok(row.is_some())
}
