use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::{DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL};

/// Application-level constants
pub const APP_NAME: &str = "MedIntel";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_RATE_LIMIT: u32 = 30;
pub const DEFAULT_RATE_WINDOW: Duration = Duration::from_secs(60);

const ENV_BIND: &str = "MEDINTEL_BIND";
const ENV_RATE_LIMIT: &str = "MEDINTEL_RATE_LIMIT";
const ENV_RATE_WINDOW: &str = "MEDINTEL_RATE_WINDOW_SECS";
const ENV_CACHE_TTL: &str = "MEDINTEL_CACHE_TTL_SECS";
const ENV_CACHE_MAX_ENTRIES: &str = "MEDINTEL_CACHE_MAX_ENTRIES";
const ENV_KNOWLEDGE_PATH: &str = "MEDINTEL_KNOWLEDGE_PATH";

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    "medintel=info,tower_http=warn".to_string()
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: '{value}'")]
    InvalidAddress { var: &'static str, value: String },

    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub rate_limit: u32,
    pub rate_window: Duration,
    pub cache_ttl: Duration,
    pub cache_max_entries: usize,
    /// External JSON catalog replacing the built-in knowledge base.
    pub knowledge_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            rate_limit: DEFAULT_RATE_LIMIT,
            rate_window: DEFAULT_RATE_WINDOW,
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            knowledge_path: None,
        }
    }
}

impl ServerConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from any variable source. Unset or blank variables
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind = match get(ENV_BIND) {
            Some(value) => value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidAddress {
                    var: ENV_BIND,
                    value,
                })?,
            None => defaults.bind,
        };

        let rate_limit = match get(ENV_RATE_LIMIT) {
            Some(value) => parse_positive(ENV_RATE_LIMIT, value)? as u32,
            None => defaults.rate_limit,
        };

        let rate_window = match get(ENV_RATE_WINDOW) {
            Some(value) => Duration::from_secs(parse_positive(ENV_RATE_WINDOW, value)?),
            None => defaults.rate_window,
        };

        let cache_ttl = match get(ENV_CACHE_TTL) {
            Some(value) => Duration::from_secs(parse_positive(ENV_CACHE_TTL, value)?),
            None => defaults.cache_ttl,
        };

        let cache_max_entries = match get(ENV_CACHE_MAX_ENTRIES) {
            Some(value) => parse_positive(ENV_CACHE_MAX_ENTRIES, value)? as usize,
            None => defaults.cache_max_entries,
        };

        Ok(Self {
            bind,
            rate_limit,
            rate_window,
            cache_ttl,
            cache_max_entries,
            knowledge_path: get(ENV_KNOWLEDGE_PATH).map(PathBuf::from),
        })
    }
}

fn parse_positive(var: &'static str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(u64::from(n)),
        _ => Err(ConfigError::InvalidNumber { var, value }),
    }
}
