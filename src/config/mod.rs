use std::env;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_JWT_EXPIRATION_HOURS: u64 = 24;
const DEFAULT_SERVICE_NAME: &str = "VoiceRead Library API";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_acquire_timeout_secs: u64,
    pub jwt_secret: String,
    pub jwt_expiration_secs: u64,
    pub allow_plaintext_passwords: bool,
    pub server_host: String,
    pub server_port: u16,
    pub service_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Optional values
    /// that fail to parse fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let jwt_expiration_hours = optional(&lookup, "JWT_EXPIRATION", DEFAULT_JWT_EXPIRATION_HOURS, |raw| {
            raw.trim_end_matches('h').parse().ok()
        });

        Ok(Config {
            database_url: required("DATABASE_URL")?,
            database_max_connections: optional(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
                |raw| raw.parse().ok().filter(|n| *n > 0),
            ),
            database_acquire_timeout_secs: optional(
                &lookup,
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
                |raw| raw.parse().ok(),
            ),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_secs: jwt_expiration_hours * 3600,
            allow_plaintext_passwords: optional(&lookup, "ALLOW_PLAINTEXT_PASSWORDS", false, |raw| {
                match raw.to_ascii_lowercase().as_str() {
                    "1" | "true" | "yes" | "on" => Some(true),
                    "0" | "false" | "no" | "off" => Some(false),
                    _ => None,
                }
            }),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.into()),
            server_port: optional(&lookup, "PORT", DEFAULT_SERVER_PORT, |raw| raw.parse().ok()),
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.into()),
        })
    }

    pub fn jwt_expiration(&self) -> Duration {
        Duration::from_secs(self.jwt_expiration_secs)
    }

    pub fn database_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.database_acquire_timeout_secs)
    }
}

fn optional<T, F, P>(lookup: &F, key: &str, default: T, parse: P) -> T
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
    T: std::fmt::Debug,
{
    match lookup(key) {
        None => default,
        Some(raw) => parse(raw.trim()).unwrap_or_else(|| {
            tracing::warn!("Invalid value {:?} for {}, using default {:?}", raw, key, default);
            default
        }),
    }
}
