pub mod config_error;
pub mod webhook_error;
