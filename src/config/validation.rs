//! Startup validation of the merged configuration.
//!
//! Every check here runs once, before the server binds. A failure aborts
//! startup with a descriptive [`ConfigError`].

use url::Url;

use super::{ForkConfig, ServerConfig, TlsConfig};
use crate::errors::config_error::{ConfigError, ConfigResult};

/// Run all validation checks against a merged configuration.
pub(super) fn validate(config: &ServerConfig) -> ConfigResult<()> {
    validate_app_name(&config.app_name)?;
    validate_api_key(&config.telnyx_api_key)?;
    validate_api_url(&config.telnyx_api_url)?;
    validate_pstn_destination(&config.ivr.pstn_destination)?;
    validate_fork(&config.fork)?;
    if let Some(tls) = &config.tls {
        validate_tls(tls)?;
    }
    Ok(())
}

/// Values copied from sample configs look like `<pstn_number_here>`.
fn is_placeholder(value: &str) -> bool {
    value.contains('<') || value.contains('>')
}

fn reject_placeholder(field: &'static str, value: &str) -> ConfigResult<()> {
    if is_placeholder(value) {
        return Err(ConfigError::Placeholder(field, value.to_string()));
    }
    Ok(())
}

fn validate_app_name(app_name: &str) -> ConfigResult<()> {
    if app_name.is_empty() {
        return Err(ConfigError::Missing("APP_NAME"));
    }
    if app_name.contains('/') || app_name.contains('{') || app_name.contains('}') {
        return Err(ConfigError::invalid(
            "APP_NAME",
            "must be a single path segment",
        ));
    }
    Ok(())
}

fn validate_api_key(api_key: &str) -> ConfigResult<()> {
    if api_key.trim().is_empty() {
        return Err(ConfigError::Missing("TELNYX_API_KEY"));
    }
    reject_placeholder("TELNYX_API_KEY", api_key)
}

fn validate_api_url(api_url: &str) -> ConfigResult<()> {
    let url = Url::parse(api_url)
        .map_err(|e| ConfigError::invalid("TELNYX_API_URL", e.to_string()))?;
    match url.scheme() {
        "https" | "http" => Ok(()),
        other => Err(ConfigError::invalid(
            "TELNYX_API_URL",
            format!("unsupported scheme '{other}'"),
        )),
    }
}

/// Transfer destinations are E.164 numbers (`+15551234567`) or SIP URIs.
fn validate_pstn_destination(destination: &str) -> ConfigResult<()> {
    reject_placeholder("PSTN_DESTINATION", destination)?;

    if let Some(digits) = destination.strip_prefix('+') {
        let valid = (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit());
        if valid {
            return Ok(());
        }
    } else if let Some(rest) = destination.strip_prefix("sip:") {
        if rest.contains('@') {
            return Ok(());
        }
    }

    Err(ConfigError::invalid(
        "PSTN_DESTINATION",
        format!("'{destination}' is neither an E.164 number nor a SIP URI"),
    ))
}

fn validate_fork(fork: &ForkConfig) -> ConfigResult<()> {
    validate_udp_address("FORK_TARGET", &fork.target)?;
    if let Some(rx) = &fork.rx {
        validate_udp_address("FORK_RX", rx)?;
    }
    if let Some(tx) = &fork.tx {
        validate_udp_address("FORK_TX", tx)?;
    }
    Ok(())
}

/// Fork targets take the form `udp:<host>:<port>`.
fn validate_udp_address(field: &'static str, address: &str) -> ConfigResult<()> {
    reject_placeholder(field, address)?;

    let rest = address
        .strip_prefix("udp:")
        .ok_or_else(|| ConfigError::invalid(field, format!("'{address}' must start with udp:")))?;
    let (host, port) = rest
        .rsplit_once(':')
        .ok_or_else(|| ConfigError::invalid(field, format!("'{address}' has no port")))?;

    if host.is_empty() {
        return Err(ConfigError::invalid(field, format!("'{address}' has no host")));
    }
    match port.parse::<u16>() {
        Ok(p) if p > 0 => Ok(()),
        _ => Err(ConfigError::invalid(
            field,
            format!("'{port}' is not a valid port"),
        )),
    }
}

fn validate_tls(tls: &TlsConfig) -> ConfigResult<()> {
    if !tls.cert_path.exists() {
        return Err(ConfigError::invalid(
            "TLS_CERT_PATH",
            format!("{} does not exist", tls.cert_path.display()),
        ));
    }
    if !tls.key_path.exists() {
        return Err(ConfigError::invalid(
            "TLS_KEY_PATH",
            format!("{} does not exist", tls.key_path.display()),
        ));
    }
    Ok(())
}
