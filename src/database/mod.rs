pub mod account_repo;
pub mod activity_repo;
pub mod banned_word_repo;
pub mod booking_repo;
pub mod comment_repo;
pub mod market_repo;
pub mod schema;

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
