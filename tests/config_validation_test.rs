//! Configuration validation tests

use prosafe_exporter::config::{Config, ServerConfig, SwitchConfig};
use prosafe_exporter::error::ExporterError;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

fn switch_config(host: &str, password: Option<&str>) -> SwitchConfig {
    SwitchConfig {
        host: host.to_string(),
        password: password.map(SecretString::from),
        ..SwitchConfig::default()
    }
}

#[test]
fn test_config_load() {
    // This assumes config/Default.toml exists relative to where cargo test is run
    let config_res = Config::load("config/Default.toml");
    assert!(config_res.is_ok(), "Failed to load default config");
}

#[test]
fn test_switch_config_defaults() {
    // Given: A default switch configuration
    let config = SwitchConfig::default();

    // Then: Login fails fast, data fetches get longer
    assert_eq!(config.login_timeout(), Duration::from_secs(5));
    assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
    assert!(config.password.is_none());
}

#[test]
fn test_server_config_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.addr, "0.0.0.0");
    assert_eq!(config.port, 9493);
}

#[test]
fn test_credential_requires_host() {
    // Given: A password but no host
    let result = switch_config("  ", Some("secret")).credential();

    // Then: Validation fails with a configuration error naming the variable
    match result {
        Err(ExporterError::Config(message)) => assert!(message.contains("SWITCH_HOST")),
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[test]
fn test_credential_requires_password() {
    for password in [None, Some("")] {
        let result = switch_config("192.168.0.239", password).credential();

        match result {
            Err(ExporterError::Config(message)) => assert!(message.contains("SWITCH_PASSWORD")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }
}

#[test]
fn test_valid_credential() {
    // Given: Host with surrounding whitespace and a password
    let credential = switch_config(" 192.168.0.239 ", Some("secret"))
        .credential()
        .expect("credential should be valid");

    // Then: Host is trimmed and the password preserved
    assert_eq!(credential.host(), "192.168.0.239");
    assert_eq!(credential.password().expose_secret(), "secret");
}
