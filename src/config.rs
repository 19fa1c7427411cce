//! Portal configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Everything the server and the backend client need is read once at boot
//! into typed structs and then passed down explicitly. Nothing below `main`
//! reads the environment again.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

// =============================================================================
// BACKEND API
// =============================================================================

/// Where the backend lives and how long a single call may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Build from `API_BASE_URL` (default `http://localhost:5000/api`) and
    /// `API_TIMEOUT_SECS` (default 30).
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("API_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
            timeout: Duration::from_secs(env_parse("API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS)),
        }
    }
}

// =============================================================================
// SERVER
// =============================================================================

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub port: u16,
    pub api: ApiConfig,
    /// Mark cookies `Secure`. On in production unless `COOKIE_SECURE` says otherwise.
    pub cookie_secure: bool,
    pub public_dir: PathBuf,
}

impl PortalConfig {
    /// Build from the process environment.
    ///
    /// - `PORT`: listen port, default 3000
    /// - `API_BASE_URL`, `API_TIMEOUT_SECS`: see [`ApiConfig::from_env`]
    /// - `APP_ENV`: `production` turns on secure cookies
    /// - `COOKIE_SECURE`: explicit override for the secure flag
    /// - `PUBLIC_DIR`: static asset directory, default `public`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw.clone() })?,
            Err(_) => DEFAULT_PORT,
        };
        let production = std::env::var("APP_ENV").is_ok_and(|v| is_production(&v));
        let cookie_secure = env_bool("COOKIE_SECURE").unwrap_or(production);
        let public_dir = std::env::var("PUBLIC_DIR").map_or_else(|_| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from);

        Ok(Self { port, api: ApiConfig::from_env(), cookie_secure, public_dir })
    }
}

fn is_production(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "production" | "prod")
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
