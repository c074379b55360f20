//! Process-wide configuration loaded once from the environment at startup.

use std::str::FromStr;

use crate::server::error::config::ConfigError;

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 8;
const DEFAULT_VENDOR_TOKEN_TTL_DAYS: i64 = 30;
/// Longest lifetime a vendor access token may be issued with.
pub const MAX_VENDOR_TOKEN_TTL_DAYS: i64 = 3650;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Upper bound on pooled database connections; acquisitions wait once exhausted.
    pub database_max_connections: u32,
    pub database_acquire_timeout_secs: u64,
    pub vendor_token_ttl_days: i64,
}

impl Config {
    /// Builds the configuration from environment variables.
    ///
    /// `DATABASE_URL` is required, every other variable falls back to a default when unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and parseable
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but cannot be parsed or is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_max_connections = optional_var(
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_DATABASE_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "DATABASE_MAX_CONNECTIONS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let vendor_token_ttl_days =
            optional_var("VENDOR_TOKEN_TTL_DAYS", DEFAULT_VENDOR_TOKEN_TTL_DAYS)?;
        if !(1..=MAX_VENDOR_TOKEN_TTL_DAYS).contains(&vendor_token_ttl_days) {
            return Err(ConfigError::InvalidEnvValue {
                var: "VENDOR_TOKEN_TTL_DAYS".to_string(),
                reason: format!("must be between 1 and {} days", MAX_VENDOR_TOKEN_TTL_DAYS),
            });
        }

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            port: optional_var("PORT", DEFAULT_PORT)?,
            database_max_connections,
            database_acquire_timeout_secs: optional_var(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS,
            )?,
            vendor_token_ttl_days,
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(var.to_string())),
    }
}

fn optional_var<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}
