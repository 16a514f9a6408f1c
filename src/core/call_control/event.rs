//! Inbound Call Control webhook events.
//!
//! Envelope shape:
//!
//! ```json
//! {
//!   "data": {
//!     "event_type": "call.initiated",
//!     "payload": {
//!       "call_control_id": "v3:...",
//!       "client_state": null,
//!       "direction": "incoming",
//!       "from": "+15550001111",
//!       "to": "+15550002222"
//!     }
//!   }
//! }
//! ```

use std::fmt;

use serde::Deserialize;

use super::client_state::CallStage;
use crate::errors::webhook_error::{WebhookError, WebhookResult};

/// Event types the IVR reacts to. Anything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallEventType {
    CallInitiated,
    CallAnswered,
    SpeakEnded,
    CallBridged,
    CallGatherEnded,
    Other(String),
}

impl CallEventType {
    pub fn as_str(&self) -> &str {
        match self {
            CallEventType::CallInitiated => "call.initiated",
            CallEventType::CallAnswered => "call.answered",
            CallEventType::SpeakEnded => "speak.ended",
            CallEventType::CallBridged => "call.bridged",
            CallEventType::CallGatherEnded => "call.gather.ended",
            CallEventType::Other(name) => name,
        }
    }
}

impl From<&str> for CallEventType {
    fn from(value: &str) -> Self {
        match value {
            "call.initiated" => CallEventType::CallInitiated,
            "call.answered" => CallEventType::CallAnswered,
            "speak.ended" => CallEventType::SpeakEnded,
            "call.bridged" => CallEventType::CallBridged,
            "call.gather.ended" => CallEventType::CallGatherEnded,
            other => CallEventType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CallEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a call leg as reported on `call.initiated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallDirection {
    Incoming,
    Outgoing,
    Unknown,
}

impl From<Option<&str>> for CallDirection {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some("incoming") => CallDirection::Incoming,
            Some("outgoing") => CallDirection::Outgoing,
            _ => CallDirection::Unknown,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WebhookEnvelope {
    data: Option<EventData>,
}

#[derive(Debug, Deserialize)]
struct EventData {
    event_type: Option<String>,
    payload: Option<EventPayload>,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    call_control_id: Option<String>,
    client_state: Option<String>,
    direction: Option<String>,
    digits: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

/// A single parsed webhook delivery for one call leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallEvent {
    pub event_type: CallEventType,
    pub call_control_id: String,
    /// Raw base64 `client_state`, absent on the first event of a leg
    pub client_state: Option<String>,
    pub direction: CallDirection,
    /// DTMF digits collected by a gather
    pub digits: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl CallEvent {
    /// Parse a webhook body.
    ///
    /// # Errors
    /// Returns a [`WebhookError`] when the body is not JSON or lacks the
    /// envelope fields every event needs.
    pub fn from_webhook(body: &[u8]) -> WebhookResult<Self> {
        let envelope: WebhookEnvelope = serde_json::from_slice(body)?;
        let data = envelope.data.ok_or(WebhookError::MissingData)?;
        let event_type = data
            .event_type
            .filter(|t| !t.is_empty())
            .ok_or(WebhookError::MissingEventType)?;
        let payload = data.payload.ok_or(WebhookError::MissingPayload)?;
        let call_control_id = payload
            .call_control_id
            .filter(|id| !id.is_empty())
            .ok_or(WebhookError::MissingCallControlId)?;

        Ok(CallEvent {
            event_type: CallEventType::from(event_type.as_str()),
            call_control_id,
            client_state: payload.client_state,
            direction: CallDirection::from(payload.direction.as_deref()),
            digits: payload.digits,
            from: payload.from,
            to: payload.to,
        })
    }

    /// Stage of the leg as carried by the echoed client state.
    pub fn stage(&self) -> CallStage {
        CallStage::from_client_state(self.client_state.as_deref())
    }

    /// Gathered digits, if the caller pressed anything.
    pub fn gathered_digits(&self) -> Option<&str> {
        self.digits.as_deref().filter(|d| !d.is_empty())
    }
}
