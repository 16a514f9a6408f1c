//! HTTP client for the Telnyx Call Control v2 REST API.
//!
//! # API Reference
//!
//! - Endpoint: `POST {api_url}/calls/{call_control_id}/actions/{action}`
//! - Auth: `Authorization: Bearer <api-key>`
//! - Actions: answer, gather_using_speak, transfer, fork_start, fork_stop, hangup
//!
//! Commands are sent exactly once. Failures are returned to the caller, which
//! in this gateway only ever logs them.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use thiserror::Error;
use url::Url;
use zeroize::Zeroizing;

use super::command::CallCommand;

/// Errors that can occur while sending a Call Control command.
#[derive(Debug, Error)]
pub enum CallControlError {
    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status
    #[error("Call Control API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The configured base URL cannot carry a call/action path
    #[error("Invalid Call Control URL: {0}")]
    InvalidUrl(String),
}

pub type CallControlResult<T> = Result<T, CallControlError>;

/// Successful provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResponse {
    pub status: u16,
    /// Parsed JSON body, or the raw text wrapped in a string when not JSON
    pub body: Value,
}

/// Sends one command for one call leg.
///
/// Implemented by [`TelnyxClient`]; the dispatcher depends only on this trait.
#[async_trait]
pub trait CommandSender: Send + Sync {
    async fn send(
        &self,
        call_control_id: &str,
        command: &CallCommand,
    ) -> CallControlResult<CommandResponse>;
}

/// Call Control REST client with a pooled connection.
#[derive(Clone)]
pub struct TelnyxClient {
    http: reqwest::Client,
    api_url: Url,
    api_key: Zeroizing<String>,
}

impl std::fmt::Debug for TelnyxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelnyxClient")
            .field("api_url", &self.api_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl TelnyxClient {
    /// Create a client for the given API base URL and key.
    pub fn new(api_url: &str, api_key: impl Into<String>) -> CallControlResult<Self> {
        let api_url =
            Url::parse(api_url).map_err(|e| CallControlError::InvalidUrl(e.to_string()))?;
        if api_url.cannot_be_a_base() {
            return Err(CallControlError::InvalidUrl(api_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("mforking-gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url,
            api_key: Zeroizing::new(api_key.into()),
        })
    }

    /// Full URL of an action on a call leg.
    pub fn action_url(&self, call_control_id: &str, action: &str) -> CallControlResult<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| CallControlError::InvalidUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .extend(["calls", call_control_id, "actions", action]);
        Ok(url)
    }

    fn build_http_request(
        &self,
        call_control_id: &str,
        command: &CallCommand,
    ) -> CallControlResult<reqwest::RequestBuilder> {
        let url = self.action_url(call_control_id, command.action())?;

        Ok(self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key.as_str()))
            .json(&command.body()))
    }
}

#[async_trait]
impl CommandSender for TelnyxClient {
    async fn send(
        &self,
        call_control_id: &str,
        command: &CallCommand,
    ) -> CallControlResult<CommandResponse> {
        let response = self
            .build_http_request(call_control_id, command)?
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(CallControlError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(CommandResponse {
            status: status.as_u16(),
            body,
        })
    }
}
