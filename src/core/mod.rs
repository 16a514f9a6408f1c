pub mod call_control;

pub use call_control::{
    CallCommand, CallControlError, CallEvent, CallStage, ClientState, CommandDispatcher,
    CommandSender, IvrRouter, TelnyxClient,
};
