use serde::Deserialize;
use sqlx::SqlitePool;

use crate::database::{account_repo, is_unique_violation};
use crate::models::{AccountRow, Role};
use crate::web::error::ApiError;
use crate::web::middleware::auth::AuthenticatedUser;

pub async fn list(pool: &SqlitePool) -> Result<Vec<AccountRow>, ApiError> {
    Ok(account_repo::list_accounts(pool).await?)
}

pub async fn get(pool: &SqlitePool, account_id: &str) -> Result<AccountRow, ApiError> {
    account_repo::load_account(pool, account_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}

/// Admin edit of an account. Passwords are deliberately not editable through
/// this path; absent fields keep their current value.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateAccountRequest {
    pub username: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

pub async fn update(
    pool: &SqlitePool,
    account_id: &str,
    request: UpdateAccountRequest,
) -> Result<AccountRow, ApiError> {
    let current = get(pool, account_id).await?;

    let username = match &request.username {
        Some(name) => {
            let name = name.trim();
            if name.is_empty() {
                return Err(ApiError::Validation("Username is required".to_string()));
            }
            name.to_string()
        }
        None => current.username,
    };
    let role = match &request.role {
        Some(raw) => Role::parse(raw.trim())
            .ok_or_else(|| ApiError::Validation(format!("Unknown role \"{}\"", raw.trim())))?,
        None => current.role,
    };
    let phone = request.phone.or(current.phone);

    match account_repo::update_account(pool, account_id, &username, phone.as_deref(), role.as_str())
        .await
    {
        Ok(_) => {}
        Err(e) if is_unique_violation(&e) => {
            return Err(ApiError::Conflict(
                "This username is already taken".to_string(),
            ))
        }
        Err(e) => return Err(e.into()),
    }
    get(pool, account_id).await
}

/// Admin delete with cascade. Self-deletion is blocked outright; the cascade
/// (seat release, bookings, listings, comments, account) runs in one
/// transaction so a partial failure cannot leave orphaned rows.
pub async fn delete(
    pool: &SqlitePool,
    requester: &AuthenticatedUser,
    account_id: &str,
) -> Result<(), ApiError> {
    if requester.id == account_id {
        return Err(ApiError::Validation(
            "You cannot delete your own account".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;
    let deleted = account_repo::cascade_delete_account(&mut tx, account_id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("User not found".to_string()));
    }
    tx.commit().await?;
    Ok(())
}
