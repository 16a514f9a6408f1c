use thiserror::Error;

/// Reasons an inbound webhook could not be turned into a call event.
///
/// These never reach the provider as an error status; the router logs them
/// and acknowledges the delivery anyway.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Webhook body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Webhook envelope has no data object")]
    MissingData,

    #[error("Webhook has no event_type")]
    MissingEventType,

    #[error("Webhook has no payload")]
    MissingPayload,

    #[error("Webhook payload has no call_control_id")]
    MissingCallControlId,
}

pub type WebhookResult<T> = Result<T, WebhookError>;
