//! Server configuration: TOML file, environment, then CLI overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding the bind host.
pub const HOST_VAR: &str = "CHAT_TICTACTOE_HOST";
/// Environment variable overriding the bind port.
pub const PORT_VAR: &str = "CHAT_TICTACTOE_PORT";

/// Configuration for the bot server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct ServerConfig {
    /// Host to bind the HTTP server to.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind the HTTP server to.
    #[serde(default = "default_port")]
    port: u16,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_filter() -> String {
    "info,chat_tictactoe=debug,chat_tictactoe_server=debug".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists (defaults otherwise), then applies the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`ServerConfig::load`], with environment variables read through `lookup`.
    #[instrument(skip(lookup))]
    pub fn load_with(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            Some(path) => {
                info!("Config file not found at {}, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };
        config.apply_env(lookup)
    }

    /// Applies `CHAT_TICTACTOE_HOST` / `CHAT_TICTACTOE_PORT` as returned by `lookup`.
    pub fn apply_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup(HOST_VAR) {
            debug!(%host, "Host overridden from environment");
            self.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            self.port = port.trim().parse().map_err(|_| {
                ConfigError::new(format!("{} is not a valid port: {:?}", PORT_VAR, port))
            })?;
            debug!(port = self.port, "Port overridden from environment");
        }
        Ok(self)
    }

    /// Address to bind, e.g. `127.0.0.1:3000`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
