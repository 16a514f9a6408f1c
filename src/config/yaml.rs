use serde::Deserialize;
use std::path::PathBuf;

use crate::errors::config_error::{ConfigError, ConfigResult};

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Values present here
/// override the environment.
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 8081
///   app_name: "telnyx-mforking"
///
/// telnyx:
///   api_key: "KEY0123..."
///   api_url: "https://api.telnyx.com/v2"
///
/// ivr:
///   voice: "female"
///   language: "en-GB"
///   pstn_destination: "+15551234567"
///
/// fork:
///   target: "udp:192.0.2.10:27000"
///   rx: "udp:192.0.2.10:27002"
///   tx: "udp:192.0.2.10:27001"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: Option<ServerYaml>,
    pub telnyx: Option<TelnyxYaml>,
    pub ivr: Option<IvrYaml>,
    pub fork: Option<ForkYaml>,
}

/// Server configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYaml {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub app_name: Option<String>,
    pub tls: Option<TlsYaml>,
}

/// TLS configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TlsYaml {
    pub enabled: Option<bool>,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

/// Telnyx Call Control credentials from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TelnyxYaml {
    pub api_key: Option<String>,
    /// Base URL of the Call Control v2 API (overridable for staging or tests)
    pub api_url: Option<String>,
}

/// IVR prompt and routing settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct IvrYaml {
    pub voice: Option<String>,
    pub language: Option<String>,
    pub welcome_prompt: Option<String>,
    pub pstn_destination: Option<String>,
}

/// Media fork targets from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ForkYaml {
    pub target: Option<String>,
    pub rx: Option<String>,
    pub tx: Option<String>,
}

impl YamlConfig {
    /// Load YAML configuration from a file
    pub fn from_file(path: &PathBuf) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        let config: YamlConfig = serde_yaml::from_str(&contents)?;

        Ok(config)
    }
}
