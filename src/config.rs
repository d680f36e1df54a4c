use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_LLM_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_LLM_MODEL: &str = "z-ai/glm-4.5-air:free";
pub const DEFAULT_LLM_RETRY_WINDOW_SECS: u64 = 2;

#[derive(Debug)]
pub struct Config {
    pub llm_base_url: String,
    pub llm_api_key: SecretString,
    pub llm_model: String,
    pub llm_timeout_seconds: Option<u64>,
    pub llm_retry_window_seconds: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// defaults for anything missing or unparseable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            llm_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            llm_api_key: SecretString::from(lookup("OPENAI_API_KEY").unwrap_or_default()),
            llm_model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            llm_timeout_seconds: lookup("LLM_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0),
            llm_retry_window_seconds: lookup("LLM_RETRY_WINDOW_SECS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_LLM_RETRY_WINDOW_SECS),
            web_server_host: lookup("WEB_SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: lookup("WEB_SERVER_PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(8000),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .filter(|origins: &Vec<String>| !origins.is_empty())
                .unwrap_or_else(|| vec!["*".to_string()]),
        }
    }

    pub fn llm_timeout(&self) -> Option<Duration> {
        self.llm_timeout_seconds.map(Duration::from_secs)
    }

    /// Upper bound on the time spent retrying rate-limited or 5xx responses.
    /// Zero disables retries.
    pub fn llm_retry_window(&self) -> Duration {
        Duration::from_secs(self.llm_retry_window_seconds)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }

    /// Reports configuration that will make every completion call fail.
    pub fn validate(&self) -> AppResult<()> {
        if self.llm_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigError(
                "OPENAI_API_KEY is not set; completion calls will return empty text".to_string(),
            ));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            llm_base_url: "http://127.0.0.1:9".to_string(),
            llm_api_key: SecretString::from("test-api-key".to_string()),
            llm_model: "test-model".to_string(),
            llm_timeout_seconds: None,
            llm_retry_window_seconds: 0,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}
