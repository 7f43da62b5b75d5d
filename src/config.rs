//! Configuration for TinyChat
//!
//! Settings come from CLI flags only; there are no config files, no
//! environment variables, and nothing persists across sessions. The
//! struct exists so defaults and bounds live in one place and are
//! validated before any request is made.

use crate::error::ChatError;
use crate::client::DEFAULT_HOST;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default model name
pub const DEFAULT_MODEL: &str = "tinyllama";

/// Default generation timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Lower bound for the generation timeout in seconds
pub const MIN_TIMEOUT_SECS: u64 = 10;

/// Upper bound for the generation timeout in seconds
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Runtime configuration assembled from CLI flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Ollama server
    pub host: String,
    /// Model name sent with each generation request
    pub model: String,
    /// Generation timeout in seconds (bounded 10-300)
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Build a configuration from CLI-supplied overrides
    ///
    /// # Examples
    ///
    /// ```
    /// use tinychat::config::Config;
    ///
    /// let config = Config::from_args(None, Some("phi3:mini".to_string()), Some(60));
    /// assert_eq!(config.model, "phi3:mini");
    /// assert_eq!(config.timeout_seconds, 60);
    /// ```
    pub fn from_args(host: Option<String>, model: Option<String>, timeout: Option<u64>) -> Self {
        let defaults = Self::default();
        Self {
            host: host.unwrap_or(defaults.host),
            model: model.unwrap_or(defaults.model),
            timeout_seconds: timeout.unwrap_or(defaults.timeout_seconds),
        }
    }

    /// Validate bounds and required fields
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Config` when the timeout is out of bounds, the
    /// model name is empty, or the host is not an HTTP URL
    pub fn validate(&self) -> Result<(), ChatError> {
        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_seconds) {
            return Err(ChatError::Config(format!(
                "timeout must be between {} and {} seconds, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_seconds
            )));
        }

        if self.model.trim().is_empty() {
            return Err(ChatError::Config("model name must not be empty".to_string()));
        }

        if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            return Err(ChatError::Config(format!(
                "host must be an http(s) URL, got '{}'",
                self.host
            )));
        }

        Ok(())
    }

    /// The generation timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "http://localhost:11434");
        assert_eq!(config.model, "tinyllama");
        assert_eq!(config.timeout_seconds, 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_args_overrides() {
        let config = Config::from_args(
            Some("http://127.0.0.1:9999".to_string()),
            Some("mistral:latest".to_string()),
            Some(30),
        );
        assert_eq!(config.host, "http://127.0.0.1:9999");
        assert_eq!(config.model, "mistral:latest");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_from_args_defaults_when_absent() {
        let config = Config::from_args(None, None, None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_validate_timeout_too_small() {
        let config = Config {
            timeout_seconds: 9,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ChatError::Config(_))));
    }

    #[test]
    fn test_validate_timeout_too_large() {
        let config = Config {
            timeout_seconds: 301,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ChatError::Config(_))));
    }

    #[test]
    fn test_validate_timeout_bounds_inclusive() {
        for secs in [MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS] {
            let config = Config {
                timeout_seconds: secs,
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "timeout {} should be valid", secs);
        }
    }

    #[test]
    fn test_validate_empty_model() {
        let config = Config {
            model: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ChatError::Config(_))));
    }

    #[test]
    fn test_validate_non_http_host() {
        let config = Config {
            host: "localhost:11434".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ChatError::Config(_))));
    }

    #[test]
    fn test_timeout_duration() {
        let config = Config {
            timeout_seconds: 45,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(45));
    }
}
