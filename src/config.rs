//! Runtime settings: flag, then environment variable, then default.

use std::time::Duration;

use crate::{Result, StatsError, BASE_URL_ENV_VAR, SEARCH_TIMEOUT_ENV_VAR};

pub const DEFAULT_BASE_URL: &str = "https://statsapi.mlb.com";
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Stats API origin without a trailing slash.
    pub base_url: String,
    /// Bound on the fallback people search.
    pub search_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_timeout: Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Resolve settings from CLI flags, falling back to the environment.
    pub fn resolve(base_url: Option<String>, search_timeout_secs: Option<u64>) -> Result<Self> {
        Ok(Self {
            base_url: resolve_base_url(base_url, std::env::var(BASE_URL_ENV_VAR).ok()),
            search_timeout: resolve_search_timeout(
                search_timeout_secs,
                std::env::var(SEARCH_TIMEOUT_ENV_VAR).ok(),
            )?,
        })
    }
}

fn resolve_base_url(flag: Option<String>, env: Option<String>) -> String {
    let url = flag
        .or(env)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    url.trim_end_matches('/').to_string()
}

fn resolve_search_timeout(flag: Option<u64>, env: Option<String>) -> Result<Duration> {
    if let Some(secs) = flag {
        return Ok(Duration::from_secs(secs));
    }
    match env.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| StatsError::Config {
                message: format!("{SEARCH_TIMEOUT_ENV_VAR} must be a whole number of seconds, got '{raw}'"),
            }),
        None => Ok(Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS)),
    }
}
