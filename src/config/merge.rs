//! Merging of environment variables (base) with YAML overrides.

use std::path::PathBuf;

use super::yaml::YamlConfig;
use super::{
    DEFAULT_APP_NAME, DEFAULT_HOST, DEFAULT_IVR_LANGUAGE, DEFAULT_IVR_VOICE, DEFAULT_PORT,
    DEFAULT_TELNYX_API_URL, DEFAULT_WELCOME_PROMPT, ForkConfig, IvrConfig, ServerConfig, TlsConfig,
    env,
};
use crate::errors::config_error::{ConfigError, ConfigResult};

/// Build a [`ServerConfig`] from the environment, letting YAML values win.
///
/// Required values (API key, PSTN destination, fork target) produce
/// [`ConfigError::Missing`] when neither layer supplies them. Semantic checks
/// happen afterwards in `validation`.
pub(super) fn merge_config(yaml: Option<YamlConfig>) -> ConfigResult<ServerConfig> {
    let yaml = yaml.unwrap_or_default();
    let server = yaml.server.unwrap_or_default();
    let telnyx = yaml.telnyx.unwrap_or_default();
    let ivr = yaml.ivr.unwrap_or_default();
    let fork = yaml.fork.unwrap_or_default();

    let host = server
        .host
        .or_else(|| env::var("HOST"))
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = match server.port {
        Some(port) => port,
        None => env::port("PORT")?.unwrap_or(DEFAULT_PORT),
    };

    let app_name = server
        .app_name
        .or_else(|| env::var("APP_NAME"))
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

    let tls_yaml = server.tls.unwrap_or_default();
    let tls_enabled = match tls_yaml.enabled {
        Some(enabled) => enabled,
        None => env::flag("TLS_ENABLED")?.unwrap_or(false),
    };
    let tls = if tls_enabled {
        let cert_path = tls_yaml
            .cert_path
            .or_else(|| env::var("TLS_CERT_PATH"))
            .ok_or(ConfigError::Missing("TLS_CERT_PATH"))?;
        let key_path = tls_yaml
            .key_path
            .or_else(|| env::var("TLS_KEY_PATH"))
            .ok_or(ConfigError::Missing("TLS_KEY_PATH"))?;
        Some(TlsConfig {
            cert_path: PathBuf::from(cert_path),
            key_path: PathBuf::from(key_path),
        })
    } else {
        None
    };

    let telnyx_api_key = telnyx
        .api_key
        .or_else(|| env::var("TELNYX_API_KEY"))
        .ok_or(ConfigError::Missing("TELNYX_API_KEY"))?;

    let telnyx_api_url = telnyx
        .api_url
        .or_else(|| env::var("TELNYX_API_URL"))
        .unwrap_or_else(|| DEFAULT_TELNYX_API_URL.to_string());

    let ivr = IvrConfig {
        voice: ivr
            .voice
            .or_else(|| env::var("IVR_VOICE"))
            .unwrap_or_else(|| DEFAULT_IVR_VOICE.to_string()),
        language: ivr
            .language
            .or_else(|| env::var("IVR_LANGUAGE"))
            .unwrap_or_else(|| DEFAULT_IVR_LANGUAGE.to_string()),
        welcome_prompt: ivr
            .welcome_prompt
            .or_else(|| env::var("IVR_WELCOME_PROMPT"))
            .unwrap_or_else(|| DEFAULT_WELCOME_PROMPT.to_string()),
        pstn_destination: ivr
            .pstn_destination
            .or_else(|| env::var("PSTN_DESTINATION"))
            .ok_or(ConfigError::Missing("PSTN_DESTINATION"))?,
    };

    let fork = ForkConfig {
        target: fork
            .target
            .or_else(|| env::var("FORK_TARGET"))
            .ok_or(ConfigError::Missing("FORK_TARGET"))?,
        rx: fork.rx.or_else(|| env::var("FORK_RX")),
        tx: fork.tx.or_else(|| env::var("FORK_TX")),
    };

    Ok(ServerConfig {
        host,
        port,
        tls,
        app_name,
        telnyx_api_key,
        telnyx_api_url,
        ivr,
        fork,
    })
}
