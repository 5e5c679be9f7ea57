use std::net::SocketAddr;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use sqlx::postgres::PgPoolOptions;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use stonehaven_web::{cache, quote, routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stonehaven_web=debug,tower_http=info".into()),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await?;
    tracing::info!("Connected to database");

    let app_cache = cache::AppCache::new();
    let state = AppState {
        db: db.clone(),
        cache: app_cache.clone(),
    };

    // Background cache warmer keeps the catalog hot
    tokio::spawn(cache::start_cache_warmer(app_cache, db));

    let app = Router::new()
        .route("/health", get(health))
        .route("/products", get(routes::catalog::list))
        .route("/products/category/:category", get(routes::catalog::by_category))
        .route("/products/:slug", get(routes::catalog::detail))
        .nest("/api", quote::router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Liveness check with cache statistics
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "cache": state.cache.stats(),
    }))
}
