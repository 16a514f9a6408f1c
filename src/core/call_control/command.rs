//! Outbound Call Control commands.
//!
//! Each variant maps to one `POST /calls/{call_control_id}/actions/{action}`
//! request. Commands carry no identity once sent.

use serde_json::{Value, json};

use super::client_state::ClientState;

/// Parameters for `gather_using_speak`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatherUsingSpeak {
    /// Text spoken to the caller
    pub payload: String,
    pub voice: String,
    pub language: String,
    pub valid_digits: String,
    /// Maximum number of digits, sent as a string
    pub max: String,
    /// Empty string means no explicit terminating digit
    pub terminating_digit: String,
    pub client_state: Option<ClientState>,
}

/// One provider action tied to a call leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallCommand {
    Answer {
        client_state: Option<ClientState>,
    },
    GatherUsingSpeak(GatherUsingSpeak),
    Transfer {
        to: String,
        from: Option<String>,
    },
    /// `rx`/`tx` are accepted here but never serialized; only `target` is sent.
    ForkStart {
        target: String,
        rx: Option<String>,
        tx: Option<String>,
    },
    ForkStop,
    Hangup,
}

impl CallCommand {
    /// Action segment of the request path.
    pub fn action(&self) -> &'static str {
        match self {
            CallCommand::Answer { .. } => "answer",
            CallCommand::GatherUsingSpeak(_) => "gather_using_speak",
            CallCommand::Transfer { .. } => "transfer",
            CallCommand::ForkStart { .. } => "fork_start",
            CallCommand::ForkStop => "fork_stop",
            CallCommand::Hangup => "hangup",
        }
    }

    /// JSON request body.
    pub fn body(&self) -> Value {
        match self {
            CallCommand::Answer { client_state } => json!({
                "client_state": client_state.as_ref().map(ClientState::encode),
            }),
            CallCommand::GatherUsingSpeak(gather) => json!({
                "payload": gather.payload,
                "voice": gather.voice,
                "language": gather.language,
                "valid_digits": gather.valid_digits,
                "max": gather.max,
                "terminating_digit": gather.terminating_digit,
                "client_state": gather.client_state.as_ref().map(ClientState::encode),
            }),
            CallCommand::Transfer { to, from } => {
                let mut body = json!({ "to": to });
                if let Some(from) = from {
                    body["from"] = json!(from);
                }
                body
            }
            CallCommand::ForkStart { target, .. } => json!({ "target": target }),
            CallCommand::ForkStop | CallCommand::Hangup => json!({}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_body_without_state_is_null() {
        let command = CallCommand::Answer { client_state: None };
        assert_eq!(command.action(), "answer");
        assert_eq!(command.body(), json!({ "client_state": null }));
    }

    #[test]
    fn test_answer_body_encodes_state() {
        let command = CallCommand::Answer {
            client_state: Some(ClientState::new("stage-outgoing")),
        };
        assert_eq!(
            command.body(),
            json!({ "client_state": "c3RhZ2Utb3V0Z29pbmc=" })
        );
    }

    #[test]
    fn test_gather_body_fields() {
        let command = CallCommand::GatherUsingSpeak(GatherUsingSpeak {
            payload: "Press 1".to_string(),
            voice: "female".to_string(),
            language: "en-GB".to_string(),
            valid_digits: "0123456789#*".to_string(),
            max: "20".to_string(),
            terminating_digit: String::new(),
            client_state: Some(ClientState::new("stage-dial")),
        });

        assert_eq!(command.action(), "gather_using_speak");
        assert_eq!(
            command.body(),
            json!({
                "payload": "Press 1",
                "voice": "female",
                "language": "en-GB",
                "valid_digits": "0123456789#*",
                "max": "20",
                "terminating_digit": "",
                "client_state": "c3RhZ2UtZGlhbA=="
            })
        );
    }

    #[test]
    fn test_transfer_body_omits_missing_origin() {
        let with_origin = CallCommand::Transfer {
            to: "+15551234567".to_string(),
            from: Some("+15550001111".to_string()),
        };
        assert_eq!(
            with_origin.body(),
            json!({ "to": "+15551234567", "from": "+15550001111" })
        );

        let without_origin = CallCommand::Transfer {
            to: "+15551234567".to_string(),
            from: None,
        };
        assert_eq!(without_origin.body(), json!({ "to": "+15551234567" }));
    }

    #[test]
    fn test_fork_start_never_sends_stream_targets() {
        let command = CallCommand::ForkStart {
            target: "udp:192.0.2.10:27000".to_string(),
            rx: Some("udp:192.0.2.10:27002".to_string()),
            tx: Some("udp:192.0.2.10:27001".to_string()),
        };
        let body = command.body();
        assert_eq!(body, json!({ "target": "udp:192.0.2.10:27000" }));
        assert!(body.get("rx").is_none());
        assert!(body.get("tx").is_none());
    }

    #[test]
    fn test_empty_bodies() {
        assert_eq!(CallCommand::ForkStop.action(), "fork_stop");
        assert_eq!(CallCommand::ForkStop.body(), json!({}));
        assert_eq!(CallCommand::Hangup.action(), "hangup");
        assert_eq!(CallCommand::Hangup.body(), json!({}));
    }
}
