//! Fire-and-forget command dispatch.
//!
//! The webhook must be acknowledged without waiting for the provider to answer
//! our commands, so every command is handed to its own detached tokio task.
//! Tasks are spawned in list order, and none waits on another, so a stalled
//! request never holds back the commands planned after it. Each task only logs
//! its outcome.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::client::CommandSender;
use super::command::CallCommand;

#[derive(Clone)]
pub struct CommandDispatcher {
    sender: Arc<dyn CommandSender>,
}

impl CommandDispatcher {
    pub fn new(sender: Arc<dyn CommandSender>) -> Self {
        Self { sender }
    }

    /// Send `commands` for one call leg in the background.
    ///
    /// Returns one handle per command, in the order the commands were issued.
    /// The handles are only useful to tests; callers are free to drop them.
    pub fn dispatch(
        &self,
        call_control_id: String,
        commands: Vec<CallCommand>,
    ) -> Vec<JoinHandle<()>> {
        commands
            .into_iter()
            .map(|command| {
                let sender = self.sender.clone();
                let call_control_id = call_control_id.clone();
                tokio::spawn(async move {
                    let action = command.action();
                    info!(
                        "Sending {} for call_control_id={}",
                        action, call_control_id
                    );

                    match sender.send(&call_control_id, &command).await {
                        Ok(response) => {
                            debug!(
                                "Command executed [{}] status={} body={}",
                                action, response.status, response.body
                            );
                        }
                        Err(e) => {
                            // No retry: the leg simply gets no further prompt.
                            error!(
                                "Command [{}] failed for call_control_id={}: {}",
                                action, call_control_id, e
                            );
                        }
                    }
                })
            })
            .collect()
    }
}
