//! Environment variable readers used as the configuration base layer.

use std::env;

use crate::errors::config_error::{ConfigError, ConfigResult};

/// Read an environment variable, treating empty values as unset.
pub(super) fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse a port number.
pub(super) fn port(name: &'static str) -> ConfigResult<Option<u16>> {
    var(name)
        .map(|raw| {
            raw.trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid(name, format!("'{raw}' is not a port: {e}")))
        })
        .transpose()
}

/// Read a boolean flag. Accepts `true/false`, `1/0`, `yes/no` (case-insensitive).
pub(super) fn flag(name: &'static str) -> ConfigResult<Option<bool>> {
    var(name)
        .map(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::invalid(name, format!("'{raw}' is not a boolean"))),
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_var_treats_blank_as_unset() {
        unsafe {
            env::set_var("MFORKING_TEST_BLANK", "   ");
        }
        assert_eq!(var("MFORKING_TEST_BLANK"), None);
        unsafe {
            env::remove_var("MFORKING_TEST_BLANK");
        }
    }

    #[test]
    #[serial]
    fn test_port_parsing() {
        unsafe {
            env::set_var("MFORKING_TEST_PORT", "8081");
        }
        assert_eq!(port("MFORKING_TEST_PORT").unwrap(), Some(8081));

        unsafe {
            env::set_var("MFORKING_TEST_PORT", "eighty");
        }
        assert!(port("MFORKING_TEST_PORT").is_err());

        unsafe {
            env::remove_var("MFORKING_TEST_PORT");
        }
        assert_eq!(port("MFORKING_TEST_PORT").unwrap(), None);
    }

    #[test]
    #[serial]
    fn test_flag_parsing() {
        for (raw, expected) in [("true", true), ("YES", true), ("0", false), ("no", false)] {
            unsafe {
                env::set_var("MFORKING_TEST_FLAG", raw);
            }
            assert_eq!(flag("MFORKING_TEST_FLAG").unwrap(), Some(expected));
        }

        unsafe {
            env::set_var("MFORKING_TEST_FLAG", "maybe");
        }
        assert!(flag("MFORKING_TEST_FLAG").is_err());

        unsafe {
            env::remove_var("MFORKING_TEST_FLAG");
        }
    }
}
