//! Client state tokens and the call stage they encode.
//!
//! Telnyx echoes the `client_state` field of a command back on every later
//! webhook for the same call leg. The gateway keeps no call table; the stage of
//! each leg lives entirely in that field as base64 text.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Errors decoding a `client_state` value received from the provider.
#[derive(Debug, Error)]
pub enum ClientStateError {
    #[error("client_state is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("client_state is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// A decoded client state token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientState(String);

impl ClientState {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Decode the base64 text carried on a webhook.
    pub fn decode(encoded: &str) -> Result<Self, ClientStateError> {
        let bytes = STANDARD.decode(encoded.trim())?;
        Ok(Self(String::from_utf8(bytes)?))
    }

    /// Base64 text to hand to the provider.
    pub fn encode(&self) -> String {
        STANDARD.encode(self.0.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Stage of a call leg as carried by its client state token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallStage {
    /// No token yet: an incoming leg that has not reached the menu.
    Lobby,
    /// The leg was placed by the application (outbound direction).
    Outgoing,
    /// The caller heard the menu and is expected to press a digit.
    Dial,
    /// A token we did not issue, or one that failed to decode.
    Unrecognized(String),
}

impl CallStage {
    pub const OUTGOING_TOKEN: &'static str = "stage-outgoing";
    pub const DIAL_TOKEN: &'static str = "stage-dial";

    /// Resolve the stage from the raw `client_state` field of a webhook.
    ///
    /// An absent or empty field is the lobby. Undecodable values degrade to
    /// [`CallStage::Unrecognized`] so the leg falls through to a no-op.
    pub fn from_client_state(encoded: Option<&str>) -> Self {
        let encoded = match encoded {
            Some(value) if !value.is_empty() => value,
            _ => return CallStage::Lobby,
        };

        match ClientState::decode(encoded) {
            Ok(state) => Self::from_token(state.as_str()),
            Err(e) => {
                tracing::warn!("Ignoring undecodable client_state '{}': {}", encoded, e);
                CallStage::Unrecognized(encoded.to_string())
            }
        }
    }

    fn from_token(token: &str) -> Self {
        match token {
            Self::OUTGOING_TOKEN => CallStage::Outgoing,
            Self::DIAL_TOKEN => CallStage::Dial,
            other => CallStage::Unrecognized(other.to_string()),
        }
    }

    /// The token to send so the provider reports this stage back.
    pub fn client_state(&self) -> Option<ClientState> {
        match self {
            CallStage::Lobby => None,
            CallStage::Outgoing => Some(ClientState::new(Self::OUTGOING_TOKEN)),
            CallStage::Dial => Some(ClientState::new(Self::DIAL_TOKEN)),
            CallStage::Unrecognized(token) => Some(ClientState::new(token.clone())),
        }
    }
}
