//! Web server bootstrap

use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::api::{self, AppState};
use crate::config::AppConfig;

/// Inbound requests are cut off after this long, which bounds a full
/// five-location pass against a slow upstream
const REQUEST_TIMEOUT: Duration = Duration::from_secs(180);

pub async fn run(config: &AppConfig, state: AppState) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api::router(state))
        .layer(cors)
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT));

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    tracing::info!("Web server running at http://{}", config.server.bind);
    axum::serve(listener, app)
        .await
        .with_context(|| "Server error")?;
    Ok(())
}
