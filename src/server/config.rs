use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_INACTIVITY_DAYS: i64 = 7;
const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub session_secure_cookie: bool,
    pub session_inactivity_days: i64,

    pub cors_allowed_origin: Option<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            session_secure_cookie: parse_optional("SESSION_SECURE_COOKIE")?.unwrap_or(false),
            session_inactivity_days: parse_optional("SESSION_INACTIVITY_DAYS")?
                .unwrap_or(DEFAULT_SESSION_INACTIVITY_DAYS),
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN").ok(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    /// Configuration for an in-memory database, used by tests.
    #[cfg(test)]
    pub fn for_test() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            session_secure_cookie: false,
            session_inactivity_days: DEFAULT_SESSION_INACTIVITY_DAYS,
            cors_allowed_origin: None,
            log_level: "debug".to_string(),
        }
    }
}

/// Reads and parses an optional environment variable.
///
/// # Returns
/// - `Ok(None)` - Variable is not set
/// - `Ok(Some(value))` - Variable is set and parsed
/// - `Err(ConfigError::InvalidEnvVar)` - Variable is set but could not be parsed
fn parse_optional<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    let Ok(raw) = std::env::var(name) else {
        return Ok(None);
    };

    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: raw,
        })
}
