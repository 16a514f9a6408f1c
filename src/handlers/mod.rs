//! HTTP request handlers
//!
//! - `api` - Status page
//! - `webhook` - Call Control event webhook

pub mod api;
pub mod webhook;

pub use webhook::call_control_webhook;
