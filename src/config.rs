//! Environment-driven configuration, read once at startup

use thiserror::Error;

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_PORT, DEFAULT_WEB_BASE_URL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of the public profile pages (`/{username}/?__a=1`)
    pub web_base_url: String,
    /// Base URL of the private web_profile_info API
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            web_base_url: DEFAULT_WEB_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        Ok(Self {
            port,
            web_base_url: lookup("INSTAGRAM_WEB_BASE_URL").unwrap_or(defaults.web_base_url),
            api_base_url: lookup("INSTAGRAM_API_BASE_URL").unwrap_or(defaults.api_base_url),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
