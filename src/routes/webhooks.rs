use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers::webhook;
use crate::state::AppState;

/// Create the Call Control webhook router
///
/// Webhooks are not signature-checked; the provider only needs a 2xx.
pub fn create_webhook_router(webhook_path: &str) -> Router<Arc<AppState>> {
    Router::new()
        .route(webhook_path, post(webhook::call_control_webhook))
        .layer(TraceLayer::new_for_http())
}
