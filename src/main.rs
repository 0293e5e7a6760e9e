use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use community_hub::database::schema;
use community_hub::web;
use community_hub::web::state::{AppState, AuthTokens};

const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400; // one day

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .expect("cannot connect to database");
    schema::ensure_schema(&pool)
        .await
        .expect("cannot apply schema");

    let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    let token_ttl = env::var("TOKEN_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

    let state = AppState {
        pool,
        auth: AuthTokens::new(jwt_secret.as_bytes(), token_ttl),
    };
    let app = web::router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("cannot parse host/port");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("cannot bind listener");
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.expect("server error");
}
