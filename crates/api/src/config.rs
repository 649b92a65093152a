use std::fmt::Display;
use std::str::FromStr;

use inventory_core::assets::status::StatusPolicy;

/// Origins allowed by default: the frontend dev server on its usual ports.
const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:5173,http://127.0.0.1:5173,http://localhost:5174,http://127.0.0.1:5174";

/// Runtime settings for the inventory API.
///
/// Every field has a local-development default; see [`ServerConfig::from_env`]
/// for the variables that override them. `DATABASE_URL` is read separately
/// by the binary because tests never need it.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Frontend origins allowed by CORS.
    pub cors_origins: Vec<String>,
    /// Requests running longer than this are answered with 408.
    pub request_timeout_secs: u64,
    pub db_max_connections: u32,
    /// Whether asset statuses outside the known set are rejected.
    pub status_policy: StatusPolicy,
}

impl ServerConfig {
    /// Read overrides from the environment.
    ///
    /// | Variable               | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `4000`                      |
    /// | `CORS_ORIGINS`         | dev server on 5173 and 5174 |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    /// | `DB_MAX_CONNECTIONS`   | `10`                        |
    /// | `ASSET_STATUS_POLICY`  | `permissive`                |
    ///
    /// Panics on a value that does not parse, so a typo stops startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: env_parse("PORT", defaults.port),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or(defaults.cors_origins),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", defaults.db_max_connections),
            status_policy: env_parse("ASSET_STATUS_POLICY", defaults.status_policy),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 4000,
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            request_timeout_secs: 30,
            db_max_connections: 10,
            status_policy: StatusPolicy::default(),
        }
    }
}

/// Parse `key` if set, otherwise fall back to `default`.
fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
