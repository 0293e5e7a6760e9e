pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::web::middleware::auth as auth_middleware;
use crate::web::routes::{activities, auth, banned_words, bookings, comments, market, users};
use crate::web::state::AppState;

pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/register", post(auth::register_handler))
        .route("/api/login", post(auth::login_handler))
        .route("/api/activities", get(activities::list_activities_handler))
        .route(
            "/api/activities/:activity_id",
            get(activities::get_activity_handler),
        )
        .route(
            "/api/activities/:activity_id/comments",
            get(comments::list_comments_handler),
        )
        .route("/api/market", get(market::list_items_handler))
        .route("/api/market/:item_id", get(market::get_item_handler));

    let protected_routes = Router::new()
        .route("/api/activities", post(activities::create_activity_handler))
        .route(
            "/api/activities/:activity_id",
            put(activities::update_activity_handler).delete(activities::delete_activity_handler),
        )
        .route(
            "/api/activities/:activity_id/join",
            post(bookings::join_activity_handler).delete(bookings::cancel_booking_handler),
        )
        .route("/api/my-bookings", get(bookings::my_bookings_handler))
        .route(
            "/api/activities/:activity_id/comments",
            post(comments::create_comment_handler),
        )
        .route(
            "/api/comments/:comment_id",
            put(comments::edit_comment_handler).delete(comments::delete_comment_handler),
        )
        .route("/api/market", post(market::create_item_handler))
        .route(
            "/api/market/:item_id",
            put(market::update_item_handler).delete(market::delete_item_handler),
        )
        .route("/api/users", get(users::list_users_handler))
        .route(
            "/api/users/:user_id",
            get(users::get_user_handler)
                .put(users::update_user_handler)
                .delete(users::delete_user_handler),
        )
        .route(
            "/api/banned-words",
            get(banned_words::list_banned_words_handler).post(banned_words::add_banned_word_handler),
        )
        .route(
            "/api/banned-words/:word_id",
            delete(banned_words::remove_banned_word_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::require_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
