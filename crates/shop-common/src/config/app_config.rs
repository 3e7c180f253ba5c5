//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    pub snowflake: SnowflakeConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations at startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Brand logo storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory logos are written to
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
    /// URL path the upload directory is served under
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: u32,
}

impl StorageConfig {
    #[must_use]
    pub fn max_file_size_bytes(&self) -> u64 {
        u64::from(self.max_file_size_mb) * 1024 * 1024
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            public_prefix: default_public_prefix(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "shopzone".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

fn default_access_token_expiry() -> i64 {
    900 // 15 minutes
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads/sellerBrand")
}

fn default_public_prefix() -> String {
    "/uploads/sellerBrand".to_string()
}

fn default_max_file_size() -> u32 {
    10
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.parse().ok())
}

impl AppConfig {
    /// Development defaults for a local run.
    ///
    /// Binds to an ephemeral port and skips migrations; storage settings can be
    /// overridden by the caller.
    #[must_use]
    pub fn local(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::Development,
            },
            api: ServerConfig {
                host: default_host(),
                port: 0,
            },
            database: DatabaseConfig {
                url: database_url.into(),
                max_connections: default_max_connections(),
                min_connections: 0,
                run_migrations: false,
            },
            jwt: JwtConfig {
                secret: jwt_secret.into(),
                access_token_expiry: default_access_token_expiry(),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: default_requests_per_second(),
                burst: default_burst(),
            },
            cors: CorsConfig::default(),
            storage: StorageConfig::default(),
            snowflake: SnowflakeConfig::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let worker_id = parse_var::<u16>("WORKER_ID").unwrap_or(0);
        if worker_id >= 1024 {
            return Err(ConfigError::InvalidValue(
                "WORKER_ID",
                format!("{worker_id} is not below 1024"),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: parse_var("API_PORT").ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or_else(default_min_connections),
                run_migrations: parse_var("RUN_MIGRATIONS")
                    .unwrap_or_else(default_run_migrations),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
                access_token_expiry: parse_var("JWT_ACCESS_TOKEN_EXPIRY")
                    .unwrap_or_else(default_access_token_expiry),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var("RATE_LIMIT_REQUESTS_PER_SECOND")
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var("RATE_LIMIT_BURST").unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
            storage: StorageConfig {
                upload_dir: env::var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_upload_dir()),
                public_prefix: env::var("UPLOAD_PUBLIC_PREFIX")
                    .unwrap_or_else(|_| default_public_prefix()),
                max_file_size_mb: parse_var("MAX_FILE_SIZE_MB")
                    .unwrap_or_else(default_max_file_size),
            },
            snowflake: SnowflakeConfig { worker_id },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
