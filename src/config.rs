use crate::error::{FeedError, Result};
use crate::fetcher::{feed_url, RECENT_COMPANY_REVIEWS_URL};

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Connector identity and transport settings for a [`Kiyoh`](crate::Kiyoh) client.
///
/// Nothing is read from the environment; the caller supplies every value.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Credential identifying the integration partner.
    pub connector_code: String,
    /// Business whose reviews are requested. Also used as [`Company::id`](crate::Company).
    pub company_code: u64,
    /// Feed endpoint without query string.
    pub endpoint: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(connector_code: impl Into<String>, company_code: u64) -> Self {
        Self {
            connector_code: connector_code.into(),
            company_code,
            endpoint: RECENT_COMPANY_REVIEWS_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("kiyoh-feed/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.connector_code.is_empty() {
            return Err(FeedError::ConfigError(
                "connector code must not be empty".to_string(),
            ));
        }
        if self.endpoint.trim().is_empty() {
            return Err(FeedError::ConfigError(
                "endpoint must not be empty".to_string(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(FeedError::ConfigError(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn feed_url(&self, page: Option<u32>) -> String {
        feed_url(&self.endpoint, &self.connector_code, self.company_code, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("ABC123", 42);
        assert_eq!(config.endpoint, RECENT_COMPANY_REVIEWS_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.user_agent.starts_with("kiyoh-feed/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_feed_url_uses_endpoint() {
        let config =
            ClientConfig::new("ABC123", 42).with_endpoint("http://127.0.0.1:9000/feed.xml");
        assert_eq!(
            config.feed_url(Some(4)),
            "http://127.0.0.1:9000/feed.xml?connectorcode=ABC123&company_id=42&page=4"
        );
    }

    #[test_case(ClientConfig::new("", 42); "#1 empty connector code")]
    #[test_case(ClientConfig::new("ABC123", 42).with_endpoint("  "); "#2 blank endpoint")]
    #[test_case(ClientConfig::new("ABC123", 42).with_timeout_ms(0); "#3 zero timeout")]
    fn test_validate_rejects(config: ClientConfig) {
        assert!(matches!(config.validate(), Err(FeedError::ConfigError(_))));
    }
}
