//! Server configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Where the server listens and how it names itself in affordance URLs.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    port: u16,

    /// Public URL prefix for affordances. Derived from the port when unset.
    #[serde(default)]
    #[getter(skip)]
    base_url: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
        }
    }
}

impl ServerConfig {
    /// Creates a configuration from explicit values.
    #[instrument]
    pub fn new(host: String, port: u16, base_url: Option<String>) -> Self {
        Self {
            host,
            port,
            base_url,
        }
    }

    /// Loads configuration from a TOML file. Missing keys take defaults.
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

    /// Loads from `path` when given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies the value of the `PORT` environment variable, if any.
    #[instrument(skip(self))]
    pub fn with_port_env(mut self, value: Option<String>) -> Result<Self, ConfigError> {
        if let Some(raw) = value {
            self.port = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::new(format!("Invalid PORT {:?}: {}", raw, e)))?;
        }
        Ok(self)
    }

    /// Applies command-line overrides; `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        base_url: Option<String>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if base_url.is_some() {
            self.base_url = base_url;
        }
        self
    }

    /// Public URL prefix without a trailing slash.
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.port),
        }
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(*config.port(), 8080);
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_base_url_follows_port() {
        let config = ServerConfig::default().with_overrides(None, Some(9000), None);
        assert_eq!(config.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ServerConfig::new(
            "0.0.0.0".to_string(),
            80,
            Some("https://xo.example.com/".to_string()),
        );
        assert_eq!(config.base_url(), "https://xo.example.com");
    }

    #[test]
    fn test_port_env() {
        let config = ServerConfig::default()
            .with_port_env(Some("3000".to_string()))
            .expect("valid port");
        assert_eq!(*config.port(), 3000);

        let err = ServerConfig::default()
            .with_port_env(Some("eighty".to_string()))
            .unwrap_err();
        assert!(err.message.contains("Invalid PORT"));
    }

    #[test]
    fn test_cli_beats_env() {
        let config = ServerConfig::default()
            .with_port_env(Some("3000".to_string()))
            .expect("valid port")
            .with_overrides(None, Some(4000), None);
        assert_eq!(*config.port(), 4000);
    }
}
