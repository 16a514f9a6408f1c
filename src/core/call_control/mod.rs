//! Telnyx Call Control: inbound events, outbound commands and the IVR flow
//! that connects them.
//!
//! - `event` - webhook envelope parsing
//! - `client_state` - base64 stage tokens echoed by the provider
//! - `router` - the event/stage transition table
//! - `command` - typed actions and their JSON bodies
//! - `client` - REST client for `/calls/{id}/actions/{action}`
//! - `dispatcher` - background, log-only sending of planned commands

pub mod client;
pub mod client_state;
pub mod command;
pub mod dispatcher;
pub mod event;
pub mod router;

pub use client::{CallControlError, CallControlResult, CommandResponse, CommandSender, TelnyxClient};
pub use client_state::{CallStage, ClientState, ClientStateError};
pub use command::{CallCommand, GatherUsingSpeak};
pub use dispatcher::CommandDispatcher;
pub use event::{CallDirection, CallEvent, CallEventType};
pub use router::IvrRouter;
