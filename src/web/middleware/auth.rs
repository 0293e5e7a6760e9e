use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::database::account_repo;
use crate::models::Role;
use crate::web::error::ApiError;
use crate::web::state::AppState;

#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: String,
    pub role: Role,
}

pub async fn require_auth(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let Some(token) = token else {
        return ApiError::Unauthenticated("No token, authorization denied".to_string())
            .into_response();
    };

    let Some(account_id) = state.auth.verify(token) else {
        return ApiError::Unauthenticated("Token is not valid".to_string()).into_response();
    };

    // Resolve the live account so a role change applies to tokens that were
    // issued before it, and a deleted account stops authenticating at once.
    match account_repo::load_auth_account(&state.pool, &account_id).await {
        Ok(Some(account)) => {
            request.extensions_mut().insert(AuthenticatedUser {
                id: account.id,
                role: account.role,
            });
            next.run(request).await
        }
        Ok(None) => ApiError::Unauthenticated("Token is not valid".to_string()).into_response(),
        Err(e) => ApiError::Database(e).into_response(),
    }
}

/// Role gate used by admin handlers; the middleware itself never checks roles.
pub fn require_admin(user: &AuthenticatedUser) -> Result<(), ApiError> {
    match user.role {
        Role::Admin => Ok(()),
        Role::User => Err(ApiError::Forbidden("Admin access required".to_string())),
    }
}
