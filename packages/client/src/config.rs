//! Client configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then environment variables. Binaries apply command-line overrides on
//! top of the result.
//!
//! ```toml
//! base_url = "http://127.0.0.1:5000"
//! timeout_secs = 30
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Backend the portal talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default upper bound on a single request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding [`ClientConfig::base_url`].
pub const BASE_URL_ENV: &str = "LEGAL_PORTAL_API_URL";

/// Environment variable overriding [`ClientConfig::timeout_secs`].
pub const TIMEOUT_ENV: &str = "LEGAL_PORTAL_TIMEOUT_SECS";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`ClientConfig`].
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// A setting has an unusable value.
    #[error("Invalid value for {key}: {message}")]
    Invalid {
        /// Setting name.
        key: String,
        /// What is wrong with it.
        message: String,
    },
}

/// Connection settings for [`crate::HttpDataSource`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend, without a trailing path.
    pub base_url: String,
    /// Per-request timeout in seconds. A request still pending after this
    /// long fails with [`crate::ClientError::Timeout`].
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from an optional TOML file and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or a
    /// setting is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                log::debug!("Reading client config from {}", path.display());
                Self::from_toml_str(&std::fs::read_to_string(path)?)?
            }
            None => Self::default(),
        };

        config.apply_overrides(
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(TIMEOUT_ENV).ok(),
        )?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the document does not parse.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies string overrides (from the environment or the command
    /// line). `None` leaves a setting untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the timeout is not a number.
    pub fn apply_overrides(
        &mut self,
        base_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(timeout) = timeout_secs {
            self.timeout_secs = timeout.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "timeout_secs".to_string(),
                message: format!("expected whole seconds, got {timeout:?}"),
            })?;
        }
        Ok(())
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an empty or non-HTTP base URL
    /// or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "base_url".to_string(),
                message: format!("expected an http(s) URL, got {url:?}"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "timeout_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Joins an endpoint path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn toml_keeps_defaults_for_missing_keys() {
        let config = ClientConfig::from_toml_str("timeout_secs = 5\n").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        assert!(ClientConfig::from_toml_str("retries = 3\n").is_err());
    }

    #[test]
    fn overrides_replace_values() {
        let mut config = ClientConfig::default();
        config
            .apply_overrides(Some("https://api.example".to_string()), Some(" 12 ".to_string()))
            .unwrap();
        assert_eq!(config.base_url, "https://api.example");
        assert_eq!(config.timeout_secs, 12);
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        let mut config = ClientConfig::default();
        let err = config
            .apply_overrides(None, Some("soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key, .. } if key == "timeout_secs"));
    }

    #[test]
    fn validate_rejects_zero_timeout_and_bad_scheme() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ClientConfig {
            base_url: "127.0.0.1:5000".to_string(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ClientConfig {
            base_url: "http://host:5000/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.endpoint("/api/helplines"), "http://host:5000/api/helplines");
    }
}
