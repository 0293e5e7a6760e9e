use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::util::ServiceExt;

use community_hub::database::schema;
use community_hub::web;
use community_hub::web::state::{AppState, AuthTokens};

async fn test_app() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    schema::ensure_schema(&pool).await.expect("schema");

    let state = AppState {
        pool: pool.clone(),
        auth: AuthTokens::new(b"integration-test-secret", 3600),
    };
    (web::router(state), pool)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn register(app: &Router, username: &str, password: &str) -> StatusCode {
    let (status, _) = send(
        app,
        "POST",
        "/api/register",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    status
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().expect("token").to_string()
}

async fn promote_to_admin(pool: &SqlitePool, username: &str) {
    sqlx::query("UPDATE accounts SET role = 'admin' WHERE username = ?")
        .bind(username)
        .execute(pool)
        .await
        .expect("promote");
}

async fn create_activity(app: &Router, admin_token: &str, title: &str, max: i64) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/activities",
        Some(admin_token),
        Some(json!({
            "title": title,
            "description": "integration",
            "category": "recreation",
            "date": "2026-09-01 10:00",
            "location": "hall",
            "max_participants": max,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("activity id").to_string()
}

#[tokio::test]
async fn register_login_and_duplicate_username() {
    let (app, _pool) = test_app().await;

    assert_eq!(register(&app, "alice", "pw123456").await, StatusCode::CREATED);
    assert_eq!(register(&app, "alice", "pw123456").await, StatusCode::CONFLICT);

    let token = login(&app, "alice", "pw123456").await;
    assert!(!token.is_empty());

    // Wrong password and unknown user fail identically.
    let (s1, b1) = send(
        &app,
        "POST",
        "/api/login",
        None,
        Some(json!({ "username": "alice", "password": "wrong" })),
    )
    .await;
    let (s2, b2) = send(
        &app,
        "POST",
        "/api/login",
        None,
        Some(json!({ "username": "nobody", "password": "wrong" })),
    )
    .await;
    assert_eq!(s1, StatusCode::UNAUTHORIZED);
    assert_eq!(s2, StatusCode::UNAUTHORIZED);
    assert_eq!(b1["message"], b2["message"]);
}

#[tokio::test]
async fn activity_admin_gate_follows_the_live_role() {
    let (app, pool) = test_app().await;
    register(&app, "carol", "pw123456").await;
    let token = login(&app, "carol", "pw123456").await;

    let payload = json!({
        "title": "yoga",
        "description": "",
        "category": "health",
        "date": "2026-09-01 10:00",
        "location": "hall",
        "max_participants": 5,
    });
    let (status, _) = send(&app, "POST", "/api/activities", Some(&token), Some(payload.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Promotion takes effect for the token that was already issued.
    promote_to_admin(&pool, "carol").await;
    let (status, _) = send(&app, "POST", "/api/activities", Some(&token), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn booking_flow_over_http() {
    let (app, pool) = test_app().await;
    register(&app, "admin", "pw123456").await;
    promote_to_admin(&pool, "admin").await;
    let admin_token = login(&app, "admin", "pw123456").await;

    register(&app, "alice", "pw123456").await;
    register(&app, "bob", "pw123456").await;
    let alice = login(&app, "alice", "pw123456").await;
    let bob = login(&app, "bob", "pw123456").await;

    let activity = create_activity(&app, &admin_token, "last-seat", 1).await;
    let join_uri = format!("/api/activities/{}/join", activity);

    // No token at all.
    let (status, body) = send(&app, "POST", &join_uri, None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["message"].is_string());

    // One seat: alice gets it, bob gets a conflict.
    let (status, _) = send(&app, "POST", &join_uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, "POST", &join_uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "This activity is full");

    // Repeat join by the same user is the other conflict.
    let (status, body) = send(&app, "POST", &join_uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "You have already booked this activity");

    // Counter stayed at one.
    let (status, body) = send(&app, "GET", &format!("/api/activities/{}", activity), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_participants"], 1);

    // my-bookings resolves the activity.
    let (status, body) = send(&app, "GET", "/api/my-bookings", Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["activity"]["title"], "last-seat");

    // Cancel frees the seat for bob.
    let (status, _) = send(&app, "DELETE", &join_uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "POST", &join_uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn comment_moderation_over_http() {
    let (app, pool) = test_app().await;
    register(&app, "admin", "pw123456").await;
    promote_to_admin(&pool, "admin").await;
    let admin_token = login(&app, "admin", "pw123456").await;

    register(&app, "alice", "pw123456").await;
    let alice = login(&app, "alice", "pw123456").await;

    let activity = create_activity(&app, &admin_token, "book club", 10).await;
    let comments_uri = format!("/api/activities/{}/comments", activity);

    // Banned-word maintenance is admin-only.
    let (status, _) = send(
        &app,
        "POST",
        "/api/banned-words",
        Some(&alice),
        Some(json!({ "word": "darn" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(
        &app,
        "POST",
        "/api/banned-words",
        Some(&admin_token),
        Some(json!({ "word": "darn" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Profane comment bounces, naming the word.
    let (status, body) = send(
        &app,
        "POST",
        &comments_uri,
        Some(&alice),
        Some(json!({ "text": "darn thing" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("darn"));

    // Clean comment lands and is publicly listed.
    let (status, created) = send(
        &app,
        "POST",
        &comments_uri,
        Some(&alice),
        Some(json!({ "text": "looking forward to it" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["username"], "alice");

    let (status, listed) = send(&app, "GET", &comments_uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed[0]["text"], "looking forward to it");

    // Admin soft delete; public listing shows the placeholder only.
    let comment_id = created["id"].as_str().unwrap();
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/comments/{}", comment_id),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = send(&app, "GET", &comments_uri, None, None).await;
    assert_eq!(listed[0]["is_deleted"], true);
    assert_eq!(listed[0]["text"], "[removed]");
    assert_ne!(listed[0]["text"], "looking forward to it");
}

#[tokio::test]
async fn market_ownership_over_http() {
    let (app, _pool) = test_app().await;
    register(&app, "alice", "pw123456").await;
    register(&app, "bob", "pw123456").await;
    let alice = login(&app, "alice", "pw123456").await;
    let bob = login(&app, "bob", "pw123456").await;

    let (status, item) = send(
        &app,
        "POST",
        "/api/market",
        Some(&alice),
        Some(json!({
            "title": "bike",
            "description": "rusty but rolls",
            "price": 25.0,
            "category": "secondhand",
            "contact_info": "ring twice",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let item_id = item["id"].as_str().unwrap();

    // Another plain user cannot delete it.
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/market/{}", item_id),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Public list still shows it, with the seller resolved.
    let (status, listed) = send(&app, "GET", "/api/market", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed[0]["seller_username"], "alice");
}

#[tokio::test]
async fn admin_user_management_over_http() {
    let (app, pool) = test_app().await;
    register(&app, "admin", "pw123456").await;
    promote_to_admin(&pool, "admin").await;
    let admin_token = login(&app, "admin", "pw123456").await;
    register(&app, "alice", "pw123456").await;

    let (status, users) = send(&app, "GET", "/api/users", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    // Hashes never leave the server.
    for user in users {
        assert!(user.get("password_hash").is_none());
    }

    let alice_id = users
        .iter()
        .find(|u| u["username"] == "alice")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();
    let admin_id = users
        .iter()
        .find(|u| u["username"] == "admin")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Self-deletion is blocked with an explicit error.
    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/users/{}", admin_id),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "You cannot delete your own account");

    // Deleting another account works and kills their token.
    let alice_token = login(&app, "alice", "pw123456").await;
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/users/{}", alice_id),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", "/api/my-bookings", Some(&alice_token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
