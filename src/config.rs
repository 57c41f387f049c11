use crate::simulator::{DEFAULT_REPLY_DELAY, DEFAULT_REPLY_TEXT};
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const REPLY_DELAY_VAR: &str = "BENAI_REPLY_DELAY_MS";
pub const REPLY_TEXT_VAR: &str = "BENAI_REPLY_TEXT";
pub const REPOSITORY_URL_VAR: &str = "BENAI_REPOSITORY_URL";

pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/yourusername/benai";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidDelay { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Runtime settings shared with the views through the context API.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub reply_delay: Duration,
    pub reply_text: String,
    pub repository_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay: DEFAULT_REPLY_DELAY,
            reply_text: DEFAULT_REPLY_TEXT.to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(REPLY_DELAY_VAR) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDelay {
                    var: REPLY_DELAY_VAR,
                    value: raw.clone(),
                })?;
            config.reply_delay = Duration::from_millis(millis);
        }

        if let Some(text) = lookup(REPLY_TEXT_VAR) {
            config.reply_text = non_empty(REPLY_TEXT_VAR, text)?;
        }

        if let Some(url) = lookup(REPOSITORY_URL_VAR) {
            config.repository_url = non_empty(REPOSITORY_URL_VAR, url)?;
        }

        Ok(config)
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(trimmed.to_string())
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = AppConfig::from_lookup(|_| None).expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.reply_delay, Duration::from_millis(1500));
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (REPLY_DELAY_VAR, " 250 "),
            (REPLY_TEXT_VAR, "Hi!"),
            (REPOSITORY_URL_VAR, "https://example.com/benai"),
        ]))
        .expect("valid config");

        assert_eq!(config.reply_delay, Duration::from_millis(250));
        assert_eq!(config.reply_text, "Hi!");
        assert_eq!(config.repository_url, "https://example.com/benai");
    }

    #[test]
    fn invalid_delay_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(REPLY_DELAY_VAR, "soon")]))
            .expect_err("delay must be numeric");
        assert_eq!(
            err,
            ConfigError::InvalidDelay {
                var: REPLY_DELAY_VAR,
                value: "soon".to_string(),
            }
        );
    }

    #[test]
    fn blank_reply_text_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(REPLY_TEXT_VAR, "  ")]))
            .expect_err("blank text");
        assert_eq!(err, ConfigError::Empty { var: REPLY_TEXT_VAR });
    }
}
