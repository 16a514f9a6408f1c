//! Server Startup Tests
//!
//! Tests for configuration loading, state construction and route layout.

use std::fs;

use axum::{body::Body, http::Request, http::StatusCode};
use serial_test::serial;
use tempfile::TempDir;
use tower::util::ServiceExt;

use mforking_gateway::config::{ForkConfig, IvrConfig};
use mforking_gateway::{ConfigError, ServerConfig, routes, state::AppState};

/// Helper function to create a minimal test configuration
fn create_minimal_config(app_name: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 8081,
        tls: None,
        app_name: app_name.to_string(),
        telnyx_api_key: "KEY-test".to_string(),
        telnyx_api_url: "https://api.telnyx.com/v2".to_string(),
        ivr: IvrConfig {
            voice: "female".to_string(),
            language: "en-GB".to_string(),
            welcome_prompt: "Welcome".to_string(),
            pstn_destination: "+15551234567".to_string(),
        },
        fork: ForkConfig {
            target: "udp:192.0.2.10:27000".to_string(),
            rx: None,
            tx: None,
        },
    }
}

fn clear_env() {
    for key in [
        "HOST",
        "PORT",
        "APP_NAME",
        "TLS_ENABLED",
        "TELNYX_API_KEY",
        "TELNYX_API_URL",
        "PSTN_DESTINATION",
        "FORK_TARGET",
        "FORK_RX",
        "FORK_TX",
    ] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

#[tokio::test]
async fn test_minimal_config_boot() {
    let app_state = AppState::new(create_minimal_config("telnyx-mforking")).unwrap();
    let app = routes::create_app(app_state);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_webhook_route_follows_app_name() {
    let app_state = AppState::new(create_minimal_config("acme-ivr")).unwrap();
    let app = routes::create_app(app_state);

    let request = Request::builder()
        .method("POST")
        .uri("/acme-ivr/mforking")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .method("POST")
        .uri("/telnyx-mforking/mforking")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_webhook_route_rejects_get() {
    let app = routes::create_app(AppState::new(create_minimal_config("telnyx-mforking")).unwrap());

    let request = Request::builder()
        .uri("/telnyx-mforking/mforking")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[test]
#[serial]
fn test_startup_fails_fast_on_placeholder_fork_target() {
    clear_env();
    unsafe {
        std::env::set_var("TELNYX_API_KEY", "KEY-test");
        std::env::set_var("PSTN_DESTINATION", "+15551234567");
        std::env::set_var("FORK_TARGET", "udp:<dest_ip_here:270010");
    }

    let result = ServerConfig::from_env();
    assert!(matches!(
        result,
        Err(ConfigError::Placeholder("FORK_TARGET", _))
    ));

    clear_env();
}

#[test]
#[serial]
fn test_startup_from_yaml_file() {
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(
        &config_path,
        r#"
server:
  host: "127.0.0.1"
  port: 8443
telnyx:
  api_key: "KEY-yaml"
ivr:
  pstn_destination: "sip:agent@pbx.example.com"
fork:
  target: "udp:media.example.com:27000"
"#,
    )
    .unwrap();

    let config = ServerConfig::from_file(&config_path).unwrap();
    assert_eq!(config.address(), "127.0.0.1:8443");
    assert_eq!(config.telnyx_api_key, "KEY-yaml");
    assert_eq!(config.ivr.pstn_destination, "sip:agent@pbx.example.com");
    assert_eq!(config.webhook_path(), "/telnyx-mforking/mforking");

    clear_env();
}
