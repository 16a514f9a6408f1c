pub mod api;
pub mod webhooks;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Public status route plus the Call Control webhook, with state applied.
pub fn create_app(state: Arc<AppState>) -> Router {
    let webhook_path = state.config.webhook_path();

    api::create_api_router()
        .merge(webhooks::create_webhook_router(&webhook_path))
        .with_state(state)
}
