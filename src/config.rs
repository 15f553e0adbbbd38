use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub upstream_base_url: String,
    pub upstream_timeout_secs: Option<u64>,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("SPOONACULAR_API_KEY")
            .context("SPOONACULAR_API_KEY environment variable is required")?;

        let upstream_base_url = env::var("SPOONACULAR_BASE_URL")
            .unwrap_or_else(|_| "https://api.spoonacular.com".to_string());

        let upstream_timeout_secs = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .context("UPSTREAM_TIMEOUT_SECS must be a number of seconds")?,
            ),
            Err(_) => None,
        };

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            api_key,
            upstream_base_url,
            upstream_timeout_secs,
            service_port,
            service_host,
        })
    }

    // The API key never goes to the log.
    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Upstream base URL: {}", self.upstream_base_url);
        tracing::info!("  Upstream timeout: {}",
            self.upstream_timeout_secs
                .map(|secs| format!("{}s", secs))
                .unwrap_or_else(|| "client default (unbounded)".to_string()));
        tracing::info!("  API key: configured ({} chars)", self.api_key.len());
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
