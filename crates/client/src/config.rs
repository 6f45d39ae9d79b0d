use std::time::Duration;

use url::Url;

use crate::query::{
    QueryClient, QueryOptions, DEFAULT_GC_TIME, DEFAULT_RETRY, DEFAULT_STALE_TIME,
};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/";

#[derive(Debug, Clone)]
pub struct Config {
    // transport configuration
    /// base url of the dashboard api; resource paths
    ///  are appended to its path
    pub api_url: Url,
    /// bearer token attached to every request, if set
    pub bearer_token: Option<String>,
    /// per-request timeout. if not set the transport
    ///  default applies
    pub request_timeout: Option<Duration>,

    // cache configuration
    /// how long a fetched result is served without a refetch
    pub stale_time: Duration,
    /// automatic retries for a failed read
    pub retry: u32,
    /// how long an unused result is kept before it is dropped
    pub gc_time: Duration,

    // misc
    pub log_level: tracing::Level,
}

impl Config {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            ..Self::default()
        }
    }

    /// Parse and set the api base url
    pub fn with_api_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api_url = Url::parse(raw)?;
        Ok(self)
    }

    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token.filter(|t| !t.is_empty());
        self
    }

    /// Read options derived from the cache settings
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions::default()
            .with_stale_time(self.stale_time)
            .with_retry(self.retry)
    }

    /// Empty cache honoring `gc_time`
    pub fn query_client(&self) -> QueryClient {
        QueryClient::with_gc_time(self.gc_time)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default api url is valid"),
            bearer_token: None,
            request_timeout: None,
            stale_time: DEFAULT_STALE_TIME,
            retry: DEFAULT_RETRY,
            gc_time: DEFAULT_GC_TIME,
            log_level: tracing::Level::INFO,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.stale_time, Duration::from_secs(30));
        assert_eq!(config.retry, 1);
        assert_eq!(config.gc_time, Duration::from_secs(300));

        let options = config.query_options();
        assert_eq!(options.stale_time, Duration::from_secs(30));
        assert_eq!(options.retry, 1);
        assert!(options.enabled);
    }

    #[test]
    fn test_with_api_url() {
        let config = Config::default()
            .with_api_url("https://ops.example.com/api/")
            .unwrap()
            .with_bearer_token(Some(String::new()));
        assert_eq!(config.api_url.path(), "/api/");
        assert!(config.bearer_token.is_none());

        assert!(Config::default().with_api_url("not a url").is_err());
    }
}
