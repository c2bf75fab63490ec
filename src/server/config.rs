use std::str::FromStr;

use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 168;
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,
    /// Lifetime of issued access tokens, between one hour and one year.
    pub token_ttl: Duration,
    /// Offset from UTC used to decide which calendar day "today" is for habit checks.
    pub utc_offset_hours: i32,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` and `JWT_SECRET` are required. `BIND_ADDR`, `TOKEN_TTL_HOURS`,
    /// `UTC_OFFSET_HOURS` and `CORS_ALLOWED_ORIGIN` fall back to defaults when unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable present and in range
    /// - `Err(AppError::ConfigErr)` - A required variable is missing, or a value does not
    ///   parse or is out of range
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            token_ttl: token_ttl(parsed("TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS)?)?,
            utc_offset_hours: utc_offset(parsed("UTC_OFFSET_HOURS", 0)?)?,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN").ok(),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

fn token_ttl(hours: i64) -> Result<Duration, ConfigError> {
    (1..=MAX_TOKEN_TTL_HOURS)
        .contains(&hours)
        .then(|| Duration::try_hours(hours))
        .flatten()
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "TOKEN_TTL_HOURS".to_string(),
            value: hours.to_string(),
            reason: format!("must be between 1 and {}", MAX_TOKEN_TTL_HOURS),
        })
}

fn utc_offset(hours: i32) -> Result<i32, ConfigError> {
    if (-23..=23).contains(&hours) {
        Ok(hours)
    } else {
        Err(ConfigError::InvalidEnvVar {
            name: "UTC_OFFSET_HOURS".to_string(),
            value: hours.to_string(),
            reason: "must be between -23 and 23".to_string(),
        })
    }
}
