use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod db;
mod state;

use bym_backend::config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bym_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_config = config::load_config().map_err(anyhow::Error::msg)?;
    tracing::info!(
        "Server will listen on {}:{}",
        app_config.server.host,
        app_config.server.port
    );

    let pool = db::connect(&app_config.database.url).await?;
    db::run_migrations(&pool).await?;

    if !app_config.email_configured() {
        tracing::warn!("SMTP credentials not configured; email notifications are disabled");
    }

    let state = Arc::new(AppState::new(pool, app_config.clone()));

    let app = Router::new()
        .route("/api/health", get(api::server::health_check))
        .route("/api/search", get(api::search::search))
        .route("/api/contact", post(api::contact::submit))
        .route(
            "/api/representative-application",
            post(api::representative::submit),
        )
        .route("/api/blog/posts", get(api::blog::list_posts))
        .route("/api/blog/posts/:slug", get(api::blog::get_post))
        .route("/api/blog/categories", get(api::blog::list_categories))
        .route("/api/sitemap.xml", get(api::sitemap::sitemap))
        .route("/api/robots.txt", get(api::sitemap::robots))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let bind_addr = app_config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
