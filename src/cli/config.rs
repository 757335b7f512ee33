//! Configuration management for stuntcheck
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.stuntcheck/config.toml
//!
//! The API credential never lives in the file; `gemini.api_key_env` names
//! the environment variable it is read from.

use crate::cli::args::Verbosity;
use crate::errors::{GrowthError, Result};
use crate::gemini::{GeminiConfig, DEFAULT_GEMINI_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default environment variable holding the Gemini API key
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "PORT";

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Complete configuration for stuntcheck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Generative service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub api_key_env: String,
}

/// stderr logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub default_verbosity: String,
}

/// `serve` listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            default_verbosity: "normal".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GrowthError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| GrowthError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard configuration file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".stuntcheck").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.gemini.model.trim().is_empty() {
            return Err(GrowthError::Config("gemini.model must not be empty".to_string()));
        }

        if self.gemini.base_url.trim().is_empty() {
            return Err(GrowthError::Config(
                "gemini.base_url must not be empty".to_string(),
            ));
        }

        if self.gemini.timeout_secs == 0 {
            return Err(GrowthError::Config(
                "gemini.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.gemini.api_key_env.trim().is_empty() {
            return Err(GrowthError::Config(
                "gemini.api_key_env must not be empty".to_string(),
            ));
        }

        if self.server.host.trim().is_empty() {
            return Err(GrowthError::Config("server.host must not be empty".to_string()));
        }

        if Verbosity::from_name(&self.logging.default_verbosity).is_none() {
            return Err(GrowthError::Config(format!(
                "Invalid verbosity level: {}",
                self.logging.default_verbosity
            )));
        }

        Ok(())
    }

    /// Verbosity used when no -v/-q flag is given
    pub fn default_verbosity(&self) -> Verbosity {
        Verbosity::from_name(&self.logging.default_verbosity).unwrap_or(Verbosity::Normal)
    }

    /// Read the API key from the process environment
    pub fn resolve_api_key(&self) -> Result<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Read the API key through `lookup`; missing or blank is fatal
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = &self.gemini.api_key_env;
        match lookup(name) {
            Some(key) if !key.trim().is_empty() => Ok(key),
            Some(_) => Err(GrowthError::Initialization(format!("{} is empty", name))),
            None => Err(GrowthError::Initialization(format!("{} is not set", name))),
        }
    }

    /// Listen address for `serve`: flags, then `PORT`, then the file
    pub fn server_addr(&self, host: Option<&str>, port: Option<u16>) -> Result<SocketAddr> {
        self.server_addr_with(host, port, |name| std::env::var(name).ok())
    }

    /// `server_addr` with an explicit environment lookup
    pub fn server_addr_with<F>(
        &self,
        host: Option<&str>,
        port: Option<u16>,
        lookup: F,
    ) -> Result<SocketAddr>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match port {
            Some(port) => port,
            None => match lookup(PORT_ENV) {
                Some(value) => value.trim().parse::<u16>().map_err(|_| {
                    GrowthError::Config(format!("{} must be a port number, got '{}'", PORT_ENV, value))
                })?,
                None => self.server.port,
            },
        };

        let host = host.unwrap_or(&self.server.host);
        format!("{}:{}", host, port)
            .parse::<SocketAddr>()
            .or_else(|_| format!("[{}]:{}", host, port).parse::<SocketAddr>())
            .map_err(|_| GrowthError::Config(format!("Invalid listen address: {}:{}", host, port)))
    }

    /// Client configuration for a resolved key
    pub fn gemini_config(&self, api_key: String) -> GeminiConfig {
        GeminiConfig {
            api_key,
            model: self.gemini.model.clone(),
            base_url: self.gemini.base_url.clone(),
            timeout: Duration::from_secs(self.gemini.timeout_secs),
        }
    }
}
