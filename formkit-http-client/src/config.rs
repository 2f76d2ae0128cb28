//! HTTP client configuration.

use formkit_config::ConfigManager;
use std::collections::BTreeMap;
use std::time::Duration;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL that relative endpoints are resolved against.
    pub base_url: Option<String>,
    /// Headers sent with every request. Per-request headers override them.
    pub default_headers: Vec<(String, String)>,
    /// Overall request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            default_headers: Vec::new(),
            timeout: None,
            user_agent: format!("formkit-http-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }

    /// Read the configuration from a [`ConfigManager`].
    ///
    /// Recognized keys: `base_url`, `timeout_secs`, `user_agent` and
    /// `headers` (an object of header names to values). Missing keys keep
    /// their defaults.
    pub fn from_config(config: &ConfigManager) -> formkit_config::Result<Self> {
        let mut builder = Self::builder();

        if let Some(base_url) = config.get_opt::<String>("base_url")? {
            builder = builder.base_url(base_url);
        }
        if let Some(secs) = config.get_opt::<u64>("timeout_secs")? {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = config.get_opt::<String>("user_agent")? {
            builder = builder.user_agent(user_agent);
        }
        if let Some(headers) = config.get_opt::<BTreeMap<String, String>>("headers")? {
            for (name, value) in headers {
                builder = builder.default_header(name, value);
            }
        }

        Ok(builder.build())
    }
}

/// Builder for [`HttpClientConfig`].
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Add a default header. A later header with the same name wins.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HttpClientConfig::default();
        assert!(config.base_url.is_none());
        assert!(config.timeout.is_none());
        assert!(config.default_headers.is_empty());
        assert!(config.user_agent.starts_with("formkit-http-client/"));
    }

    #[test]
    fn test_from_config() {
        let manager = ConfigManager::new();
        manager.set("base_url", "https://api.example.com").unwrap();
        manager.set("timeout_secs", "12").unwrap();
        manager
            .set(
                "headers",
                serde_json::json!({ "X-Client": "formkit", "Accept": "application/json" }),
            )
            .unwrap();

        let config = HttpClientConfig::from_config(&manager).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.timeout, Some(Duration::from_secs(12)));
        assert_eq!(
            config.default_headers,
            vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("X-Client".to_string(), "formkit".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_config_rejects_bad_timeout() {
        let manager = ConfigManager::new();
        manager.set("timeout_secs", "later").unwrap();
        assert!(HttpClientConfig::from_config(&manager).is_err());
    }
}
