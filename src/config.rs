use crate::error::ExporterError;
use crate::prosafe::Credential;
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub switch: SwitchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SwitchConfig {
    /// Hostname or IP of the switch, optionally with `:port`, without scheme
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub password: Option<SecretString>,
    #[serde(default = "default_login_timeout")]
    pub login_timeout_seconds: u64,
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9493
}

fn default_login_timeout() -> u64 {
    5
}

fn default_fetch_timeout() -> u64 {
    10
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            password: None,
            login_timeout_seconds: default_login_timeout(),
            fetch_timeout_seconds: default_fetch_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            port: default_port(),
        }
    }
}

impl SwitchConfig {
    /// Validated switch credential.
    ///
    /// Host and password are both required; an empty value counts as missing.
    pub fn credential(&self) -> crate::error::Result<Credential> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(ExporterError::Config(
                "SWITCH_HOST environment variable is required".to_string(),
            ));
        }

        match &self.password {
            Some(password) if !password.expose_secret().is_empty() => {
                Ok(Credential::new(host, password.clone()))
            }
            _ => Err(ExporterError::Config(
                "SWITCH_PASSWORD environment variable is required".to_string(),
            )),
        }
    }

    pub fn login_timeout(&self) -> Duration {
        Duration::from_secs(self.login_timeout_seconds)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        // Load environment variables from .env if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("PROSAFE_EXPORTER").separator("__"))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
