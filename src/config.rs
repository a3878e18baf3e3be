use crate::constants::{DEFAULT_BASE_URL, DEFAULT_CORS_RELAY, DEFAULT_HTTP_TIMEOUT};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the portal client
///
/// A `Config` is built once and passed explicitly to the client; there is
/// no process-wide configuration state. Two clients with different
/// settings (say, one routed through the CORS relay and one direct) can
/// coexist in the same process.
pub struct Config {
    /// Base URL of the portal's versioned SOAP endpoint
    pub base_url: String,
    /// Route requests through the public CORS relay host
    pub bypass_cors: bool,
    /// CORS relay host prefix applied when `bypass_cors` is set
    pub cors_relay: String,
    /// HTTP timeout in seconds
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads `.env` if present, then reads `SUPORTAL_BASE_URL`,
    /// `SUPORTAL_BYPASS_CORS`, `SUPORTAL_CORS_RELAY` and
    /// `SUPORTAL_HTTP_TIMEOUT`, falling back to the built-in defaults for
    /// anything unset or unparseable.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Loaded .env file"),
            Err(e) => debug!("No .env file loaded: {e}"),
        }

        Config {
            base_url: env_or("SUPORTAL_BASE_URL", String::from(DEFAULT_BASE_URL)),
            bypass_cors: env_or("SUPORTAL_BYPASS_CORS", false),
            cors_relay: env_or("SUPORTAL_CORS_RELAY", String::from(DEFAULT_CORS_RELAY)),
            timeout: env_or("SUPORTAL_HTTP_TIMEOUT", DEFAULT_HTTP_TIMEOUT),
        }
    }
}

/// Reads and parses an environment variable, falling back to `default`
/// when the variable is missing or does not parse.
fn env_or<T: FromStr>(var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    let Ok(raw) = env::var(var) else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!("Could not parse {var}={raw}, using the default");
            default
        }
    }
}
