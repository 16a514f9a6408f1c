use axum::{Router, routing::get};
use std::sync::Arc;

use crate::handlers::api;
use crate::state::AppState;

/// Public routes (no auth)
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(api::health_check))
}
