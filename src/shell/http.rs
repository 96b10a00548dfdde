use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::health::inbound::http as health_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
