//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::endpoints::{Endpoints, DEFAULT_API_BASE};
use crate::tracking::{FileStore, DEFAULT_PAGE};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub fixture: FixtureConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Content API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Site-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_page")]
    pub default_page: String,
}

fn default_page() -> String {
    DEFAULT_PAGE.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_page: default_page(),
        }
    }
}

/// Where the anonymous session id is persisted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    pub store_path: Option<String>,
}

/// Local fixture content server
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("folio").join("config.toml")),
            Some(PathBuf::from("/etc/folio/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("FOLIO_API_URL") {
            self.api.base_url = url;
        }

        if let Some(path) = var("FOLIO_SESSION_STORE") {
            self.session.store_path = Some(path);
        }

        if let Some(host) = var("FOLIO_FIXTURE_HOST") {
            self.fixture.host = host;
        }
        if let Some(port) = var("FOLIO_FIXTURE_PORT") {
            if let Ok(p) = port.parse() {
                self.fixture.port = p;
            }
        }

        if let Some(level) = var("FOLIO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("FOLIO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Endpoint registry for the configured API base
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api.base_url)
    }

    /// Session store at the configured path, or the per-user default
    pub fn session_store(&self) -> FileStore {
        match &self.session.store_path {
            Some(path) => FileStore::new(path),
            None => FileStore::new(FileStore::default_path()),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Folio Configuration
#
# Environment variables override these settings:
# - FOLIO_API_URL
# - FOLIO_SESSION_STORE
# - FOLIO_FIXTURE_HOST
# - FOLIO_FIXTURE_PORT
# - FOLIO_LOG_LEVEL
# - FOLIO_LOG_FORMAT

[api]
# Content API base URL; endpoint paths are appended to it
base_url = "https://abdulraheem-api.vercel.app/api"

[site]
# Page name reported by the view beacon when none is given
default_page = "home"

[session]
# File holding the anonymous session id (default: per-user data dir)
# store_path = "~/.local/share/folio/session.json"

[fixture]
# Local fixture content server
host = "127.0.0.1"
port = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
        assert_eq!(config.site.default_page, "home");
        assert_eq!(config.fixture.port, 5000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
        assert_eq!(config.fixture.host, "127.0.0.1");
        assert!(config.session.store_path.is_none());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse("[api]\nbase_url = \"http://localhost:5000/api\"\n").unwrap();
        assert_eq!(
            config.endpoints().resolve("about", None).unwrap(),
            "http://localhost:5000/api/about"
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FOLIO_API_URL", "http://staging/api"),
            ("FOLIO_FIXTURE_PORT", "not-a-port"),
            ("FOLIO_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://staging/api");
        assert_eq!(config.fixture.port, 5000);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
