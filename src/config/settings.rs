//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// Which repository backend holds locations
    pub storage: StorageSettings,

    /// Rate limiting configuration
    pub rate_limit: RateLimitSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL (required for the postgres backend)
    pub url: Option<String>,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply embedded migrations on startup
    pub run_migrations: bool,
}

/// Storage backend selection.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL via sqlx
    Postgres,
    /// Process-local map, lost on restart
    Memory,
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    /// Disable to skip the limiter entirely
    pub enabled: bool,

    /// Requests allowed per client per window
    pub requests_per_window: u32,

    /// Window length in seconds
    pub window_seconds: u64,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the loaded values are inconsistent (see [`Settings::validate`]).
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Self::builder(&environment)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("storage.backend", std::env::var("STORAGE_BACKEND").ok())?
            .build()?
            .try_deserialize()
            .and_then(Self::validate)
    }

    /// Defaults only, no files or environment. Used by tests and as the
    /// base layer of [`Settings::load`].
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder("test")?
            .build()?
            .try_deserialize()
            .and_then(Self::validate)
    }

    fn builder(
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("environment", environment)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .set_default("storage.backend", "memory")?
            .set_default("rate_limit.enabled", true)?
            .set_default("rate_limit.requests_per_window", 60)?
            .set_default("rate_limit.window_seconds", 60)?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])
    }

    fn validate(settings: Self) -> Result<Self, ConfigError> {
        if settings.storage.backend == StorageBackend::Postgres
            && settings.database.url.as_deref().map_or(true, str::is_empty)
        {
            return Err(ConfigError::Message(
                "database.url (or DATABASE_URL) is required for the postgres storage backend"
                    .into(),
            ));
        }

        if settings.rate_limit.enabled
            && (settings.rate_limit.requests_per_window == 0
                || settings.rate_limit.window_seconds == 0)
        {
            return Err(ConfigError::Message(
                "rate_limit.requests_per_window and rate_limit.window_seconds must be positive"
                    .into(),
            ));
        }

        Ok(settings)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
