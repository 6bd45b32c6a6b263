use anyhow::{Context, Result};
use tracing::warn;

use crate::llm_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
/// Only malformed numeric values fail startup; the API key is read as-is.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_timeout_secs: u64,
    pub port: u16,
    /// Max in-flight requests. `None` leaves concurrency unbounded.
    pub concurrency_limit: Option<usize>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Absence surfaces as an auth failure on the first call.
        let openai_api_key = lookup("OPENAI_API_KEY").unwrap_or_default();

        let concurrency_limit = match lookup("CONCURRENCY_LIMIT") {
            Some(raw) => {
                let limit = raw
                    .parse::<usize>()
                    .context("CONCURRENCY_LIMIT must be a positive integer")?;
                anyhow::ensure!(limit > 0, "CONCURRENCY_LIMIT must be a positive integer");
                Some(limit)
            }
            None => None,
        };

        Ok(Config {
            openai_api_key,
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            openai_timeout_secs: lookup("OPENAI_TIMEOUT_SECS")
                .unwrap_or_else(|| "600".to_string())
                .parse::<u64>()
                .context("OPENAI_TIMEOUT_SECS must be a whole number of seconds")?,
            port: lookup("PORT")
                .unwrap_or_else(|| "7860".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            concurrency_limit,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Logs a warning when no API key is configured. Call after logging is initialized.
    pub fn warn_if_unauthenticated(&self) {
        if self.openai_api_key.is_empty() {
            warn!("OPENAI_API_KEY is not set; chat requests will fail to authenticate");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.openai_api_key, "");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.openai_timeout_secs, 600);
        assert_eq!(config.port, 7860);
        assert_eq!(config.concurrency_limit, None);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-abc"),
            ("OPENAI_BASE_URL", "http://localhost:8000/v1"),
            ("OPENAI_TIMEOUT_SECS", "30"),
            ("PORT", "8080"),
            ("CONCURRENCY_LIMIT", "4"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.openai_api_key, "sk-abc");
        assert_eq!(config.openai_base_url, "http://localhost:8000/v1");
        assert_eq!(config.openai_timeout_secs, 30);
        assert_eq!(config.port, 8080);
        assert_eq!(config.concurrency_limit, Some(4));
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_zero_concurrency_limit_is_rejected() {
        assert!(config_from(&[("CONCURRENCY_LIMIT", "0")]).is_err());
        assert!(config_from(&[("CONCURRENCY_LIMIT", "many")]).is_err());
    }
}
