//! Configuration loader for the `agroweather-advisory` backend service.
//!
//! This module centralizes all runtime configuration values and their
//! defaults, loading from environment variables (with optional `.env` file
//! support provided by the caller). Consolidating configuration here keeps
//! `env::var` calls out of the rest of the codebase.

use std::env;

use anyhow::{anyhow, Result};

/// Default upstream API root; override with `OPENWEATHER_API_URL`.
const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u32 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u32>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse a required string environment variable.
macro_rules! require_env {
    ($var_name:expr) => {
        env::var($var_name)
            .map_err(|_| anyhow!("{} must be set in .env or environment", $var_name))?
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent
/// configuration snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// PostgreSQL connection string.
    pub db_url: String,

    /// Maximum number of database connections in the pool.
    pub db_pool_max: u32,

    /// Weather provider API base URL.
    pub api_url: String,

    /// Weather provider API key.
    pub api_key: String,

    /// HTTP listen port.
    pub http_port: u16,
}

/// Load configuration from environment variables with defaults.
///
/// Required:
/// - `DATABASE_URL` – PostgreSQL connection string
/// - `OPENWEATHER_API_KEY` – weather provider API key
///
/// Optional:
/// - `OPENWEATHER_API_URL` – provider base URL (default: the public
///   OpenWeatherMap 2.5 endpoint)
/// - `DB_POOL_MAX` – max DB connections (default: 5)
/// - `PORT` – HTTP listen port (default: 5000)
///
/// Returns an error if any required variable is missing or invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let db_url = require_env!("DATABASE_URL");
    let api_key = require_env!("OPENWEATHER_API_KEY");
    let api_url = env::var("OPENWEATHER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let db_pool_max = parse_env_u32!("DB_POOL_MAX", 5);
    let http_port = u16::try_from(parse_env_u32!("PORT", 5000))
        .map_err(|_| anyhow!("PORT must fit in a u16"))?;

    Ok(Config {
        db_url,
        db_pool_max,
        api_url,
        api_key,
        http_port,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    ///
    /// Masks sensitive information (database password, API key) while
    /// showing all configuration values that were loaded.
    pub fn log_config(&self) {
        // ---
        // Mask the password in the database URL for security
        let masked_db_url = if let Some(at_pos) = self.db_url.rfind('@') {
            if let Some(colon_pos) = self.db_url[..at_pos].rfind(':') {
                format!(
                    "{}:****{}",
                    &self.db_url[..colon_pos],
                    &self.db_url[at_pos..]
                )
            } else {
                self.db_url.clone()
            }
        } else {
            self.db_url.clone()
        };

        tracing::info!("Configuration loaded:");
        tracing::info!("  DATABASE_URL        : {}", masked_db_url);
        tracing::info!("  OPENWEATHER_API_URL : {}", self.api_url);
        tracing::info!("  OPENWEATHER_API_KEY : {}", mask_key(&self.api_key));
        tracing::info!("  DB_POOL_MAX         : {}", self.db_pool_max);
        tracing::info!("  PORT                : {}", self.http_port);
    }
}

/// Show only the tail of an API key.
fn mask_key(key: &str) -> String {
    // ---
    if key.len() > 4 {
        format!("****{}", &key[key.len() - 4..])
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_mask_key_keeps_tail_only() {
        // ---
        assert_eq!(mask_key("abcdef123456"), "****3456");
        assert_eq!(mask_key("abc"), "****");
    }
}
