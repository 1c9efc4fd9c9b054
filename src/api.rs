//! HTTP API surface for the sync endpoint

use std::sync::Arc;

use axum::{Router, extract::State, response::Json, routing::get};

use crate::models::{LOCATIONS, WeatherRecord};
use crate::nws::NwsClient;
use crate::sync;

/// Shared state handed to the handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream client, built once at startup
    pub client: Arc<NwsClient>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/weather/sync", get(sync_weather))
        .with_state(state)
}

/// Query every configured location and answer with whatever resolved
///
/// Always 200 with a JSON array. Lookup failures are contained per location,
/// and a pass in which every location failed yields an empty array. The
/// inbound request carries no parameters the handler consults.
async fn sync_weather(State(state): State<AppState>) -> Json<Vec<WeatherRecord>> {
    let report = sync::run(&state.client, &LOCATIONS).await;
    Json(report.records)
}
