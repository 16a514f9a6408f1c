use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::call_control::{
    CallControlResult, CommandDispatcher, CommandSender, IvrRouter, TelnyxClient,
};

/// Shared, read-only state handed to every request handler.
///
/// Holds no per-call data: each webhook is handled from its own payload and
/// the client state token it carries.
pub struct AppState {
    pub config: ServerConfig,
    pub router: IvrRouter,
    pub dispatcher: CommandDispatcher,
}

impl AppState {
    /// Build state that sends commands to the configured Telnyx API.
    pub fn new(config: ServerConfig) -> CallControlResult<Arc<Self>> {
        let client = TelnyxClient::new(&config.telnyx_api_url, config.telnyx_api_key.clone())?;
        Ok(Self::with_sender(config, Arc::new(client)))
    }

    /// Build state around any [`CommandSender`].
    pub fn with_sender(config: ServerConfig, sender: Arc<dyn CommandSender>) -> Arc<Self> {
        let router = IvrRouter::from_config(&config);
        Arc::new(Self {
            config,
            router,
            dispatcher: CommandDispatcher::new(sender),
        })
    }
}
