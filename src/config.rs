//! Configuration management for the book review server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub session_ttl_hours: u64,
}

/// Open Library search proxy settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ExternalConfig {
    pub base_url: String,
    pub search_limit: u32,
    /// Request timeout; unset leaves the HTTP client default in place
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    pub simulated_delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub external: ExternalConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables, e.g. BOOKREVIEW__EXTERNAL__BASE_URL
            .add_source(
                Environment::with_prefix("BOOKREVIEW")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("auth.jwt_secret", env::var("JWT_SECRET").ok())?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that deserialize but cannot be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.session_ttl().is_none() {
            return Err(ConfigError::Message(format!(
                "auth.session_ttl_hours is out of range: {}",
                self.auth.session_ttl_hours
            )));
        }
        Ok(())
    }
}

impl AuthConfig {
    /// Session lifetime, `None` when the hour count does not fit a duration
    pub fn session_ttl(&self) -> Option<chrono::Duration> {
        i64::try_from(self.session_ttl_hours)
            .ok()
            .and_then(chrono::Duration::try_hours)
    }
}

impl ExternalConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl CatalogConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-this-secret-in-production".to_string(),
            session_ttl_hours: 24,
        }
    }
}

impl Default for ExternalConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openlibrary.org".to_string(),
            search_limit: 5,
            timeout_secs: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 100,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
