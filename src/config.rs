//! Generator configuration from environment variables.

use dotenv::dotenv;
use std::env;
use thiserror::Error;

use crate::api_connection::endpoints::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";
pub const MODEL_ENV_VAR: &str = "SMART_MEALS_MODEL";
pub const BASE_URL_ENV_VAR: &str = "SMART_MEALS_BASE_URL";

const DEFAULT_SITE_URL: &str = "http://localhost:3000";
const DEFAULT_APP_NAME: &str = "SmartMeals";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key not found in environment: {0}")]
    MissingApiKey(String),
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// `None` when the variable is unset or blank. Checked when the generator is built.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Sent as `HTTP-Referer`.
    pub site_url: String,
    /// Sent as `X-Title`.
    pub app_name: String,
}

impl GeneratorConfig {
    /// Load configuration from the process environment (and `.env`, if present).
    ///
    /// Optional:
    /// - `SMART_MEALS_MODEL` (default: "google/gemini-2.5-flash")
    /// - `SMART_MEALS_BASE_URL` (default: "https://openrouter.ai/api/v1")
    /// - `SITE_URL`, `APP_NAME`
    ///
    /// A missing `OPENROUTER_API_KEY` is not an error here.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            api_key: non_blank(API_KEY_ENV_VAR),
            model: non_blank(MODEL_ENV_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_blank(BASE_URL_ENV_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            site_url: non_blank("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            app_name: non_blank("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingApiKey(API_KEY_ENV_VAR.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = GeneratorConfig::from_lookup(|_| None);
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.app_name, "SmartMeals");
        assert_eq!(
            config.require_api_key(),
            Err(ConfigError::MissingApiKey("OPENROUTER_API_KEY".to_string()))
        );
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[(API_KEY_ENV_VAR, "   ")]));
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV_VAR, "sk-test"),
            (MODEL_ENV_VAR, "openai/gpt-4o-mini"),
            (BASE_URL_ENV_VAR, "http://127.0.0.1:8080/v1/"),
        ]));
        assert_eq!(config.require_api_key(), Ok("sk-test"));
        assert_eq!(config.model, "openai/gpt-4o-mini");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/v1");
    }
}
