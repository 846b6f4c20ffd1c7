//! Probe configuration

use thiserror::Error;

/// Environment variable holding the service endpoint URL.
pub const ENDPOINT_VAR: &str = "SERVICE_ENDPOINT";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "API_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required configuration value {0} is missing or empty")]
    Missing(&'static str),
}

/// Connection settings for the remote data service.
///
/// Loaded once at startup and passed into the probe explicitly; nothing
/// downstream reads the environment.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub service_endpoint: String,
    pub api_key: String,
}

impl ProbeConfig {
    /// Build a config from already-resolved values, rejecting empty ones.
    pub fn new(
        service_endpoint: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let service_endpoint = non_empty(service_endpoint).ok_or(ConfigError::Missing(ENDPOINT_VAR))?;
        let api_key = non_empty(api_key).ok_or(ConfigError::Missing(API_KEY_VAR))?;

        Ok(Self {
            service_endpoint,
            api_key,
        })
    }

    /// Resolve configuration from CLI flags, falling back to the environment.
    pub fn resolve(
        endpoint_flag: Option<String>,
        api_key_flag: Option<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint = endpoint_flag.or_else(|| std::env::var(ENDPOINT_VAR).ok());
        let api_key = api_key_flag.or_else(|| std::env::var(API_KEY_VAR).ok());

        Self::new(endpoint, api_key)
    }

    /// Load configuration from the environment only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, None)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_endpoint() {
        let err = ProbeConfig::new(None, Some("key".into())).unwrap_err();
        assert!(err.to_string().contains(ENDPOINT_VAR));
    }

    #[test]
    fn rejects_missing_api_key() {
        let err = ProbeConfig::new(Some("https://x.example.co".into()), None).unwrap_err();
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn rejects_empty_values() {
        assert!(ProbeConfig::new(Some("  ".into()), Some("key".into())).is_err());
        assert!(ProbeConfig::new(Some("https://x.example.co".into()), Some("".into())).is_err());
    }

    #[test]
    fn accepts_both_values() {
        let config =
            ProbeConfig::new(Some("https://x.example.co".into()), Some("anon-key".into())).unwrap();
        assert_eq!(config.service_endpoint, "https://x.example.co");
        assert_eq!(config.api_key, "anon-key");
    }
}
