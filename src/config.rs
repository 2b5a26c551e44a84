//! Environment-driven configuration for the feed server.

use std::path::PathBuf;

use chrono::FixedOffset;
use thiserror::Error;

use crate::post::{parse_utc_offset, Locale, TimestampFormatter};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web Server
    pub web_host: String,
    pub web_port: u16,
    pub static_dir: Option<PathBuf>,

    // Posts
    pub posts_path: PathBuf,

    // Timestamps
    pub locale: Locale,
    pub utc_offset: FixedOffset,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
            static_dir: optional_env("STATIC_DIR").map(PathBuf::from),

            // Posts
            posts_path: PathBuf::from(env_or_default("POSTS_PATH", "./data/posts.json")),

            // Timestamps
            locale: parse_locale(&env_or_default("LOCALE", "pt-BR"))?,
            utc_offset: parse_offset(&env_or_default("UTC_OFFSET", "-03:00"))?,
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.web_host.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "WEB_HOST".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.posts_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "POSTS_PATH".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Formatter for the configured locale and offset.
    #[must_use]
    pub fn timestamp_formatter(&self) -> TimestampFormatter {
        TimestampFormatter::new(self.locale, self.utc_offset)
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_locale(value: &str) -> Result<Locale, ConfigError> {
    value
        .parse()
        .map_err(|message| ConfigError::InvalidValue {
            name: "LOCALE".to_string(),
            message,
        })
}

fn parse_offset(value: &str) -> Result<FixedOffset, ConfigError> {
    parse_utc_offset(value).ok_or_else(|| ConfigError::InvalidValue {
        name: "UTC_OFFSET".to_string(),
        message: format!("must look like '+HH:MM', '-HH:MM' or 'UTC', got '{value}'"),
    })
}
