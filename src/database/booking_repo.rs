use sqlx::{SqliteConnection, SqlitePool};

use crate::models::BookingWithActivityRow;

const SQL_INSERT_BOOKING: &str = r#"
INSERT INTO bookings (id, user_id, activity_id)
VALUES (?, ?, ?)
"#;

// Capacity check and increment in one statement: the update only lands while
// a seat is free, so two racing joins cannot both claim the last one.
const SQL_CLAIM_SEAT: &str = r#"
UPDATE activities
SET current_participants = current_participants + 1
WHERE id = ? AND current_participants < max_participants
"#;

const SQL_RELEASE_SEAT: &str = r#"
UPDATE activities
SET current_participants = MAX(current_participants - 1, 0)
WHERE id = ?
"#;

const SQL_DELETE_BOOKING: &str = r#"
DELETE FROM bookings
WHERE user_id = ? AND activity_id = ?
"#;

const SQL_LIST_FOR_USER: &str = r#"
SELECT
  b.id,
  b.booked_at,
  a.id AS activity_id,
  a.title,
  a.description,
  a.category,
  a.date,
  a.location,
  a.max_participants,
  a.current_participants,
  a.created_at AS activity_created_at
FROM bookings b
JOIN activities a ON a.id = b.activity_id
WHERE b.user_id = ?
ORDER BY b.booked_at DESC, b.rowid DESC
"#;

const SQL_COUNT_FOR_ACTIVITY: &str = "SELECT COUNT(*) FROM bookings WHERE activity_id = ?";

pub async fn insert_booking(
    conn: &mut SqliteConnection,
    id: &str,
    user_id: &str,
    activity_id: &str,
) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_BOOKING)
        .bind(id)
        .bind(user_id)
        .bind(activity_id)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn try_claim_seat(conn: &mut SqliteConnection, activity_id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_CLAIM_SEAT)
        .bind(activity_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn release_seat(conn: &mut SqliteConnection, activity_id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_RELEASE_SEAT)
        .bind(activity_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_booking(
    conn: &mut SqliteConnection,
    user_id: &str,
    activity_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_BOOKING)
        .bind(user_id)
        .bind(activity_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn list_for_user(
    pool: &SqlitePool,
    user_id: &str,
) -> sqlx::Result<Vec<BookingWithActivityRow>> {
    sqlx::query_as::<_, BookingWithActivityRow>(SQL_LIST_FOR_USER)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn count_for_activity(pool: &SqlitePool, activity_id: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar(SQL_COUNT_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_one(pool)
        .await
}
