use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode};
use tracing::{debug, info, warn};

use crate::core::call_control::{CallEvent, CallEventType};
use crate::state::AppState;

/// Receive one Call Control event and react to it.
///
/// Always answers `200 OK` with an empty body. Parsing failures are logged;
/// commands are dispatched in the background and never awaited here.
pub async fn call_control_webhook(State(state): State<Arc<AppState>>, body: Bytes) -> StatusCode {
    let event = match CallEvent::from_webhook(&body) {
        Ok(event) => event,
        Err(e) => {
            warn!("Invalid webhook received: {}", e);
            return StatusCode::OK;
        }
    };

    info!(
        "Webhook received - event_type={} call_control_id={}",
        event.event_type, event.call_control_id
    );
    debug!(
        "Webhook received - complete payload: {}",
        String::from_utf8_lossy(&body)
    );

    if event.event_type == CallEventType::CallGatherEnded {
        debug!(
            "Received DTMF [{}] for call_control_id={}",
            event.digits.as_deref().unwrap_or(""),
            event.call_control_id
        );
    }

    let commands = state.router.plan(&event);
    let _ = state
        .dispatcher
        .dispatch(event.call_control_id, commands);

    StatusCode::OK
}
