//! Configuration loader for the `argo-oceanview` service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). Every value has a default so the service starts
//! with an empty environment.
//!
use std::{env, net::SocketAddr, time::Duration};

use anyhow::{anyhow, Result};

/// Default upstream endpoint serving the float dataset.
pub const DEFAULT_API_URL: &str =
    "https://marinex1-jl8rbjs94tmzekuawzajhv.streamlit.app/api/argo-data";

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u64 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Upstream URL returning a JSON array of floats.
    pub api_url: String,

    /// Per-request timeout for the upstream fetch.
    pub fetch_timeout: Duration,

    /// How long a fetched dataset stays cached.
    pub cache_ttl: Duration,

    /// Address the HTTP API listens on.
    pub bind_addr: SocketAddr,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `ARGO_API_URL` – upstream float data URL (default: [`DEFAULT_API_URL`])
/// - `ARGO_FETCH_TIMEOUT_SECS` – upstream request timeout (default: 10)
/// - `ARGO_CACHE_TTL_SECS` – dataset cache lifetime (default: 300)
/// - `ARGO_BIND_ADDR` – listen address (default: `0.0.0.0:8080`)
///
/// Returns an error if any variable is set to an invalid value.
pub fn load_from_env() -> Result<Config> {
    // ---
    let api_url = env::var("ARGO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let fetch_timeout_secs = parse_env_u64!("ARGO_FETCH_TIMEOUT_SECS", 10);
    let cache_ttl_secs = parse_env_u64!("ARGO_CACHE_TTL_SECS", 300);
    let bind_addr = parse_bind_addr(env::var("ARGO_BIND_ADDR").ok().as_deref())?;

    if fetch_timeout_secs == 0 {
        return Err(anyhow!(
            "Invalid ARGO_FETCH_TIMEOUT_SECS: must be at least 1"
        ));
    }

    Ok(Config {
        api_url,
        fetch_timeout: Duration::from_secs(fetch_timeout_secs),
        cache_ttl: Duration::from_secs(cache_ttl_secs),
        bind_addr,
    })
}

fn parse_bind_addr(raw: Option<&str>) -> Result<SocketAddr> {
    match raw {
        Some(addr) => addr
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid ARGO_BIND_ADDR '{}': {}", addr, e)),
        None => Ok(SocketAddr::from(([0, 0, 0, 0], 8080))),
    }
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    ///
    /// Query strings are stripped from the upstream URL since they may carry
    /// access tokens.
    pub fn log_config(&self) {
        // ---
        let shown_url = match self.api_url.split_once('?') {
            Some((base, _)) => format!("{base}?****"),
            None => self.api_url.clone(),
        };

        tracing::info!("Configuration loaded:");
        tracing::info!("  ARGO_API_URL            : {}", shown_url);
        tracing::info!(
            "  ARGO_FETCH_TIMEOUT_SECS : {}",
            self.fetch_timeout.as_secs()
        );
        tracing::info!("  ARGO_CACHE_TTL_SECS     : {}", self.cache_ttl.as_secs());
        tracing::info!("  ARGO_BIND_ADDR          : {}", self.bind_addr);
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_bind_addr_default_and_override() {
        // ---
        assert_eq!(parse_bind_addr(None).unwrap().port(), 8080);
        assert_eq!(
            parse_bind_addr(Some(" 127.0.0.1:9000 ")).unwrap(),
            SocketAddr::from(([127, 0, 0, 1], 9000))
        );
        assert!(parse_bind_addr(Some("localhost")).is_err());
    }
}
