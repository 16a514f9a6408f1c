//! Configuration module for the media forking gateway
//!
//! This module handles server configuration from various sources: .env files, YAML files,
//! and environment variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//!
//! # Example
//! ```rust,no_run
//! use mforking_gateway::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

mod env;
mod merge;
mod validation;
mod yaml;

pub use crate::errors::config_error::{ConfigError, ConfigResult};
pub use yaml::YamlConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_APP_NAME: &str = "telnyx-mforking";
pub const DEFAULT_TELNYX_API_URL: &str = "https://api.telnyx.com/v2";
pub const DEFAULT_IVR_VOICE: &str = "female";
pub const DEFAULT_IVR_LANGUAGE: &str = "en-GB";
pub const DEFAULT_WELCOME_PROMPT: &str =
    "Welcome to this Telnyx Demo,Please press 1 to transfer the call and start forking,";

/// TLS configuration for HTTPS
#[derive(Debug, Clone)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Text-to-speech and routing settings for the IVR menu
#[derive(Debug, Clone)]
pub struct IvrConfig {
    pub voice: String,
    pub language: String,
    /// Prompt spoken while gathering the caller's selection
    pub welcome_prompt: String,
    /// Number (or SIP URI) the caller is transferred to after pressing a digit
    pub pstn_destination: String,
}

/// Media fork destinations, each in `udp:<host>:<port>` form
#[derive(Debug, Clone)]
pub struct ForkConfig {
    pub target: String,
    /// Receive-leg stream target. Carried on the command but not sent.
    pub rx: Option<String>,
    /// Transmit-leg stream target. Carried on the command but not sent.
    pub tx: Option<String>,
}

/// Server configuration
///
/// Immutable once loaded; shared by the webhook router and the Call Control
/// client through `AppState`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    /// Path prefix of the webhook route: `POST /{app_name}/mforking`
    pub app_name: String,

    // Telnyx Call Control
    pub telnyx_api_key: String,
    pub telnyx_api_url: String,

    pub ivr: IvrConfig,
    pub fork: ForkConfig,
}

/// Zeroize the API key when the configuration is dropped.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        self.telnyx_api_key.zeroize();
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Call `dotenvy::dotenv()` first if `.env` values should be picked up.
    ///
    /// # Errors
    /// Returns an error if a required value is missing, malformed, or still a
    /// placeholder.
    pub fn from_env() -> ConfigResult<Self> {
        let config = merge::merge_config(None)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// After loading and merging, performs validation on the final configuration.
    pub fn from_file(path: &PathBuf) -> ConfigResult<Self> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;

        let config = merge::merge_config(Some(yaml_config))?;

        validation::validate(&config)?;

        Ok(config)
    }

    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if TLS is enabled
    pub fn is_tls_enabled(&self) -> bool {
        self.tls.is_some()
    }

    /// Route path the provider posts call events to
    pub fn webhook_path(&self) -> String {
        format!("/{}/mforking", self.app_name)
    }
}
