//! One-shot admin bootstrap: creates the admin account, or promotes it if it
//! already exists. Username/password come from ADMIN_USERNAME /
//! ADMIN_PASSWORD (defaults: admin / admin1234 — change it after first login).

use bcrypt::{hash, DEFAULT_COST};
use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;
use uuid::Uuid;

use community_hub::database::{account_repo, schema};
use community_hub::models::Role;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .expect("cannot connect to database");
    schema::ensure_schema(&pool)
        .await
        .expect("cannot apply schema");

    let username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin1234".to_string());

    match account_repo::load_credentials_by_username(&pool, &username)
        .await
        .expect("cannot query accounts")
    {
        Some(existing) => {
            sqlx::query("UPDATE accounts SET role = ? WHERE id = ?")
                .bind(Role::Admin.as_str())
                .bind(&existing.id)
                .execute(&pool)
                .await
                .expect("cannot promote account");
            println!("Promoted existing account \"{}\" to admin", username);
        }
        None => {
            let password_hash = hash(&password, DEFAULT_COST).expect("cannot hash password");
            let id = Uuid::new_v4().to_string();
            account_repo::insert_account(
                &pool,
                &id,
                &username,
                &password_hash,
                Role::Admin.as_str(),
                None,
            )
            .await
            .expect("cannot create admin account");
            println!("Admin account \"{}\" created", username);
        }
    }
}
