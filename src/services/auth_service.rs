use bcrypt::{hash, verify, DEFAULT_COST};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::{account_repo, is_unique_violation};
use crate::models::Role;
use crate::web::error::ApiError;
use crate::web::state::AuthTokens;

// One message for unknown usernames and wrong passwords, so login failures
// cannot be used to enumerate accounts.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

pub async fn register(pool: &SqlitePool, request: RegisterRequest) -> Result<(), ApiError> {
    let username = request.username.trim();
    if username.is_empty() {
        return Err(ApiError::Validation("Username is required".to_string()));
    }
    if request.password.is_empty() {
        return Err(ApiError::Validation("Password is required".to_string()));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;
    let id = Uuid::new_v4().to_string();
    let phone = request.phone.as_deref().map(str::trim).filter(|p| !p.is_empty());

    match account_repo::insert_account(
        pool,
        &id,
        username,
        &password_hash,
        Role::User.as_str(),
        phone,
    )
    .await
    {
        Ok(()) => Ok(()),
        Err(e) if is_unique_violation(&e) => Err(ApiError::Conflict(
            "This username is already taken".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

pub async fn login(
    pool: &SqlitePool,
    tokens: &AuthTokens,
    request: LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let Some(credentials) =
        account_repo::load_credentials_by_username(pool, request.username.trim()).await?
    else {
        return Err(ApiError::Unauthenticated(INVALID_CREDENTIALS.to_string()));
    };

    if !verify(&request.password, &credentials.password_hash)? {
        return Err(ApiError::Unauthenticated(INVALID_CREDENTIALS.to_string()));
    }

    let token = tokens.issue(&credentials.id)?;
    Ok(LoginResponse {
        token,
        role: credentials.role,
    })
}
