//! IVR state machine.
//!
//! Maps one inbound [`CallEvent`] to the commands it triggers. The current
//! stage comes only from the event's client state, so the table below is the
//! whole of the call-flow logic:
//!
//! | Event               | Stage / condition        | Commands                      |
//! |---------------------|--------------------------|-------------------------------|
//! | `call.initiated`    | incoming                 | answer (no state)             |
//! | `call.initiated`    | any other direction      | answer (`stage-outgoing`)     |
//! | `call.answered`     | lobby                    | gather_using_speak (`stage-dial`) |
//! | `call.gather.ended` | `stage-dial` with digits | transfer, then fork_start     |
//! | anything else       |                          | nothing                       |

use super::client_state::CallStage;
use super::command::{CallCommand, GatherUsingSpeak};
use super::event::{CallDirection, CallEvent, CallEventType};
use crate::config::{ForkConfig, IvrConfig, ServerConfig};

/// Digits accepted by the menu gather
pub const VALID_DIGITS: &str = "0123456789#*";
/// Maximum digits collected by the menu gather
pub const MAX_DIGITS: &str = "20";

#[derive(Debug, Clone)]
pub struct IvrRouter {
    ivr: IvrConfig,
    fork: ForkConfig,
}

impl IvrRouter {
    pub fn new(ivr: IvrConfig, fork: ForkConfig) -> Self {
        Self { ivr, fork }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.ivr.clone(), config.fork.clone())
    }

    /// Commands to issue, in order, in reaction to `event`.
    pub fn plan(&self, event: &CallEvent) -> Vec<CallCommand> {
        match (&event.event_type, event.stage()) {
            (CallEventType::CallInitiated, _) => {
                let next = match event.direction {
                    CallDirection::Incoming => CallStage::Lobby,
                    _ => CallStage::Outgoing,
                };
                vec![CallCommand::Answer {
                    client_state: next.client_state(),
                }]
            }

            (CallEventType::CallAnswered, CallStage::Lobby) => {
                vec![self.menu_gather()]
            }
            // Outbound legs need nothing once answered.
            (CallEventType::CallAnswered, _) => Vec::new(),

            (CallEventType::SpeakEnded, _) | (CallEventType::CallBridged, _) => Vec::new(),

            (CallEventType::CallGatherEnded, CallStage::Dial) => match event.gathered_digits() {
                Some(_) => vec![
                    CallCommand::Transfer {
                        to: self.ivr.pstn_destination.clone(),
                        from: event.from.clone(),
                    },
                    CallCommand::ForkStart {
                        target: self.fork.target.clone(),
                        rx: self.fork.rx.clone(),
                        tx: self.fork.tx.clone(),
                    },
                ],
                None => Vec::new(),
            },
            // Lobby-level gathers have no menu behind them yet.
            (CallEventType::CallGatherEnded, _) => Vec::new(),

            (CallEventType::Other(_), _) => Vec::new(),
        }
    }

    fn menu_gather(&self) -> CallCommand {
        CallCommand::GatherUsingSpeak(GatherUsingSpeak {
            payload: self.ivr.welcome_prompt.clone(),
            voice: self.ivr.voice.clone(),
            language: self.ivr.language.clone(),
            valid_digits: VALID_DIGITS.to_string(),
            max: MAX_DIGITS.to_string(),
            terminating_digit: String::new(),
            client_state: CallStage::Dial.client_state(),
        })
    }
}
