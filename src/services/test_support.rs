use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::{account_repo, activity_repo, schema};
use crate::models::Role;
use crate::web::middleware::auth::AuthenticatedUser;

// A single connection keeps the in-memory database alive and shared for the
// whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    schema::ensure_schema(&pool).await.expect("schema");
    pool
}

pub async fn seed_account(pool: &SqlitePool, username: &str, role: Role) -> AuthenticatedUser {
    let id = Uuid::new_v4().to_string();
    // Not a real bcrypt hash; the seeded accounts never log in.
    account_repo::insert_account(pool, &id, username, "x", role.as_str(), None)
        .await
        .expect("seed account");
    AuthenticatedUser { id, role }
}

pub async fn seed_activity(pool: &SqlitePool, title: &str, max_participants: i64) -> String {
    let id = Uuid::new_v4().to_string();
    activity_repo::insert_activity(
        pool,
        activity_repo::NewActivity {
            id: &id,
            title,
            description: "seeded",
            category: "recreation",
            date: "2026-09-01 10:00",
            location: "community hall",
            max_participants,
        },
    )
    .await
    .expect("seed activity");
    id
}
