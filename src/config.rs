use std::env;

use thiserror::Error;

pub const API_KEY_VAR: &str = "WEATHERAPI_KEY";
pub const BASE_URL_VAR: &str = "WEATHERAPI_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Provider credentials and endpoint, read once at startup and handed to the
/// weather client. Keeping this out of source means the key lives in the
/// environment (or whatever secret store exports it).
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set (export your WeatherAPI.com key)")]
    MissingKey(&'static str),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingKey(API_KEY_VAR))?;

        let base_url = lookup(BASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }
}
