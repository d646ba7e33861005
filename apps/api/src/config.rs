use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
///
/// `GEMINI_API_KEY` is deliberately not required: a missing key surfaces as a
/// generation failure the first time an action runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_timeout: Option<Duration>,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub notification_ttl: chrono::Duration,
    pub session_idle_ttl: chrono::Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            gemini_timeout: optional_env::<u64>("GEMINI_TIMEOUT_SECS")?
                .map(Duration::from_secs),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            notification_ttl: ttl_env("NOTIFICATION_TTL_SECS", 5)?,
            session_idle_ttl: ttl_env("SESSION_IDLE_TTL_SECS", 3600)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            gemini_timeout: None,
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            notification_ttl: chrono::Duration::seconds(5),
            session_idle_ttl: chrono::Duration::hours(1),
        }
    }
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(None),
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(optional_env(key)?.unwrap_or(default))
}

/// Reads a whole number of seconds that must fit a `chrono::Duration`.
fn ttl_env(key: &str, default_secs: u64) -> Result<chrono::Duration> {
    let secs: u64 = parse_env(key, default_secs)?;
    chrono::Duration::from_std(Duration::from_secs(secs))
        .with_context(|| format!("Environment variable '{key}' is out of range: {secs}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value: u16 = parse_env("RESUME_ANALYZER_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("RESUME_ANALYZER_TEST_TTL", " 42 ");
        let value: u64 = parse_env("RESUME_ANALYZER_TEST_TTL", 5).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUME_ANALYZER_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("RESUME_ANALYZER_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("RESUME_ANALYZER_TEST_BAD_PORT"));
    }

    #[test]
    fn test_ttl_env_reads_seconds() {
        std::env::set_var("RESUME_ANALYZER_TEST_NOTIFY_TTL", "7");
        let ttl = ttl_env("RESUME_ANALYZER_TEST_NOTIFY_TTL", 5).unwrap();
        assert_eq!(ttl, chrono::Duration::seconds(7));
    }

    #[test]
    fn test_ttl_env_rejects_out_of_range() {
        std::env::set_var("RESUME_ANALYZER_TEST_HUGE_TTL", u64::MAX.to_string());
        let err = ttl_env("RESUME_ANALYZER_TEST_HUGE_TTL", 3600).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
