// src/config.rs
use crate::error::{AppError, AppResult};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Backend connection settings, read once at startup and immutable after.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl AppConfig {
    /// Load configuration from process environment.
    ///
    /// `GEMINI_API_KEY` is required; the server refuses to start without it.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config("GEMINI_API_KEY environment variable not set".to_string())
            })?;

        let base_url = lookup("GEMINI_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        // the completion path is appended later, strip a trailing slash here
        let base_url = base_url.trim_end_matches('/').to_string();

        let model = lookup("TEXBOT_MODEL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let result = AppConfig::from_lookup(lookup_from(&[]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn empty_api_key_is_a_config_error() {
        let result = AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "  ")]));
        assert!(result.is_err());
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "k-123")])).unwrap();
        assert_eq!(config.api_key, "k-123");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn overrides_are_honored_and_trailing_slash_stripped() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k-123"),
            ("GEMINI_BASE_URL", "http://localhost:9999/v1/"),
            ("TEXBOT_MODEL", "test-model"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9999/v1");
        assert_eq!(config.model, "test-model");
    }
}
