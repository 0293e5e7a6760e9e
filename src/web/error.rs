use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Domain error taxonomy. Every handler boundary translates into this, and
/// this alone decides status codes and the `{"message": ...}` body shape, so
/// no domain error reaches the transport layer raw.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Your comment contains a banned word (\"{0}\")")]
    ProfaneContent(String),

    #[error("Internal server error")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Internal server error")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::ProfaneContent(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(e) => {
                error!("Persistence failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::PasswordHash(e) => {
                error!("Password hashing failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Token(e) => {
                error!("Token issue failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // 500s keep the generic Display message; internals stay in the log.
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
