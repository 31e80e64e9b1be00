use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

pub const GUARDIAN_KEY_VAR: &str = "NEWS_GUARDIAN_APIKEY";
pub const NYT_KEY_VAR: &str = "NEWS_NYT_APIKEY";
pub const NEWSAPI_KEY_VAR: &str = "NEWS_API_ORG_KEY";

const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub guardian_api_key: Option<String>,
    pub nyt_api_key: Option<String>,
    pub newsapi_key: Option<String>,
    /// Upper bound on a single upstream call before it counts as failed.
    pub upstream_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            guardian_api_key: None,
            nyt_api_key: None,
            newsapi_key: None,
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Missing credentials are fine, the matching source just reports failure
        let guardian_api_key = optional_var(GUARDIAN_KEY_VAR);
        let nyt_api_key = optional_var(NYT_KEY_VAR);
        let newsapi_key = optional_var(NEWSAPI_KEY_VAR);

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let upstream_timeout = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| {
                    AppError::ConfigError(format!("Invalid upstream timeout: {}", e))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            guardian_api_key,
            nyt_api_key,
            newsapi_key,
            upstream_timeout,
        })
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
