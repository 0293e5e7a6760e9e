use sqlx::{SqliteConnection, SqlitePool};

use crate::models::{AccountRow, AuthAccountRow, CredentialsRow};

const SQL_INSERT_ACCOUNT: &str = r#"
INSERT INTO accounts (id, username, password_hash, role, phone)
VALUES (?, ?, ?, ?, ?)
"#;

const SQL_LOAD_CREDENTIALS: &str = r#"
SELECT id, password_hash, role
FROM accounts
WHERE username = ?
LIMIT 1
"#;

const SQL_LOAD_AUTH_ACCOUNT: &str = r#"
SELECT id, role
FROM accounts
WHERE id = ?
LIMIT 1
"#;

const SQL_LIST_ACCOUNTS: &str = r#"
SELECT id, username, role, phone, joined_at
FROM accounts
ORDER BY joined_at DESC, rowid DESC
"#;

const SQL_LOAD_ACCOUNT: &str = r#"
SELECT id, username, role, phone, joined_at
FROM accounts
WHERE id = ?
LIMIT 1
"#;

const SQL_UPDATE_ACCOUNT: &str = r#"
UPDATE accounts
SET username = ?, phone = ?, role = ?
WHERE id = ?
"#;

// Cascade pieces, run inside one transaction by the service layer. Seats the
// user still held are released before the booking rows go, keeping the
// participant counters in line with the ledger.
const SQL_RELEASE_SEATS_FOR_USER: &str = r#"
UPDATE activities
SET current_participants = MAX(current_participants - 1, 0)
WHERE id IN (SELECT activity_id FROM bookings WHERE user_id = ?)
"#;

const SQL_DELETE_BOOKINGS_FOR_USER: &str = "DELETE FROM bookings WHERE user_id = ?";
const SQL_DELETE_MARKET_ITEMS_FOR_SELLER: &str = "DELETE FROM market_items WHERE seller_id = ?";
const SQL_DELETE_COMMENTS_FOR_USER: &str = "DELETE FROM comments WHERE user_id = ?";
const SQL_DELETE_ACCOUNT: &str = "DELETE FROM accounts WHERE id = ?";

pub async fn insert_account(
    pool: &SqlitePool,
    id: &str,
    username: &str,
    password_hash: &str,
    role: &str,
    phone: Option<&str>,
) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_ACCOUNT)
        .bind(id)
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .bind(phone)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn load_credentials_by_username(
    pool: &SqlitePool,
    username: &str,
) -> sqlx::Result<Option<CredentialsRow>> {
    sqlx::query_as::<_, CredentialsRow>(SQL_LOAD_CREDENTIALS)
        .bind(username)
        .fetch_optional(pool)
        .await
}

pub async fn load_auth_account(
    pool: &SqlitePool,
    account_id: &str,
) -> sqlx::Result<Option<AuthAccountRow>> {
    sqlx::query_as::<_, AuthAccountRow>(SQL_LOAD_AUTH_ACCOUNT)
        .bind(account_id)
        .fetch_optional(pool)
        .await
}

pub async fn list_accounts(pool: &SqlitePool) -> sqlx::Result<Vec<AccountRow>> {
    sqlx::query_as::<_, AccountRow>(SQL_LIST_ACCOUNTS)
        .fetch_all(pool)
        .await
}

pub async fn load_account(pool: &SqlitePool, account_id: &str) -> sqlx::Result<Option<AccountRow>> {
    sqlx::query_as::<_, AccountRow>(SQL_LOAD_ACCOUNT)
        .bind(account_id)
        .fetch_optional(pool)
        .await
}

pub async fn update_account(
    pool: &SqlitePool,
    account_id: &str,
    username: &str,
    phone: Option<&str>,
    role: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_ACCOUNT)
        .bind(username)
        .bind(phone)
        .bind(role)
        .bind(account_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn cascade_delete_account(
    conn: &mut SqliteConnection,
    account_id: &str,
) -> sqlx::Result<u64> {
    sqlx::query(SQL_RELEASE_SEATS_FOR_USER)
        .bind(account_id)
        .execute(&mut *conn)
        .await?;
    sqlx::query(SQL_DELETE_BOOKINGS_FOR_USER)
        .bind(account_id)
        .execute(&mut *conn)
        .await?;
    sqlx::query(SQL_DELETE_MARKET_ITEMS_FOR_SELLER)
        .bind(account_id)
        .execute(&mut *conn)
        .await?;
    sqlx::query(SQL_DELETE_COMMENTS_FOR_USER)
        .bind(account_id)
        .execute(&mut *conn)
        .await?;
    let res = sqlx::query(SQL_DELETE_ACCOUNT)
        .bind(account_id)
        .execute(&mut *conn)
        .await?;
    Ok(res.rows_affected())
}
