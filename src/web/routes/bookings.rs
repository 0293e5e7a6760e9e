use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde_json::json;

use crate::services::booking_service::{self, BookingView, JoinOutcome};
use crate::web::error::ApiError;
use crate::web::middleware::auth::AuthenticatedUser;
use crate::web::state::AppState;

pub async fn join_activity_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    match booking_service::join(&state.pool, &auth_user.id, &activity_id).await? {
        JoinOutcome::Booked => Ok(Json(json!({ "message": "Booking confirmed" }))),
        JoinOutcome::Full => Err(ApiError::Conflict("This activity is full".to_string())),
        JoinOutcome::AlreadyBooked => Err(ApiError::Conflict(
            "You have already booked this activity".to_string(),
        )),
    }
}

pub async fn cancel_booking_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    booking_service::cancel(&state.pool, &auth_user.id, &activity_id).await?;
    Ok(Json(json!({ "message": "Booking cancelled" })))
}

pub async fn my_bookings_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingView>>, ApiError> {
    Ok(Json(
        booking_service::list_for_user(&state.pool, &auth_user.id).await?,
    ))
}
