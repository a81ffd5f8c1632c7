// Runtime configuration for the completion gateway

use anyhow::{bail, Result};

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_SERVICE_LABEL: &str = "GPT-4o";

/// Process-wide configuration, built once at startup and passed explicitly
/// to the gateway. There is no ambient global client.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the completion service
    pub api_key: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Base URL of the service (no trailing slash)
    pub base_url: String,
    /// Display name used in banners and error prefixes
    pub service_label: String,
}

impl Config {
    /// Create a configuration with defaults for everything but the key.
    pub fn with_api_key(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            service_label: DEFAULT_SERVICE_LABEL.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            bail!("API key is empty");
        }
        if self.model.trim().is_empty() {
            bail!("Model identifier is empty");
        }
        if self.base_url.trim().is_empty() {
            bail!("Base URL is empty");
        }
        if self.base_url.ends_with('/') {
            bail!("Base URL must not end with a trailing slash");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::with_api_key("sk-test".to_string());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.service_label, DEFAULT_SERVICE_LABEL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let config = Config::with_api_key("   ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_trailing_slash_rejected() {
        let mut config = Config::with_api_key("sk-test".to_string());
        config.base_url = "https://api.openai.com/".to_string();
        assert!(config.validate().is_err());
    }
}
