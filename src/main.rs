use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use weathersync::api::AppState;
use weathersync::config::AppConfig;
use weathersync::nws::NwsClient;
use weathersync::web;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::load()?;
    let client = NwsClient::new(&config.upstream)?;
    let state = AppState {
        client: Arc::new(client),
    };

    web::run(&config, state).await
}
