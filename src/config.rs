use crate::constants::{DEFAULT_UPSTREAM_URL, ENV_API_KEY, ENV_UPSTREAM_URL, UPSTREAM_TIMEOUT_SECS};
use std::{env, time::Duration};

#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    pub upstream_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// An empty API key means no `Authorization` header is sent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let upstream_url =
            lookup(ENV_UPSTREAM_URL).unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
        let api_key = lookup(ENV_API_KEY).filter(|key| !key.is_empty());

        RelayConfig {
            upstream_url,
            api_key,
            timeout: Duration::from_secs(UPSTREAM_TIMEOUT_SECS),
        }
    }
}
