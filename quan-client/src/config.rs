//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | QUAN_API_URL | http://localhost:8080/api | Backend base URL |
//! | QUAN_API_TOKEN | - | Bearer token |
//! | QUAN_BRANCH_ID | - | Branch the client works for |
//! | QUAN_REQUEST_TIMEOUT_SECS | 30 | Request timeout |
//! | QUAN_KITCHEN_POLL_SECS | 30 | Kitchen order refresh interval |

use std::time::Duration;

use crate::{ClientResult, NetworkHttpClient};
use shared::BranchId;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_KITCHEN_POLL_SECS: u64 = 30;

/// Client configuration for connecting to the restaurant backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Branch scope for list endpoints and new orders
    pub branch_id: Option<BranchId>,

    /// Kitchen order refresh interval
    pub kitchen_poll_interval: Duration,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            branch_id: None,
            kitchen_poll_interval: Duration::from_secs(DEFAULT_KITCHEN_POLL_SECS),
        }
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("QUAN_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
        );
        config.token = std::env::var("QUAN_API_TOKEN").ok().filter(|t| !t.is_empty());
        config.branch_id = std::env::var("QUAN_BRANCH_ID")
            .ok()
            .and_then(|v| v.parse().ok());
        config.timeout = std::env::var("QUAN_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        config.kitchen_poll_interval = std::env::var("QUAN_KITCHEN_POLL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_KITCHEN_POLL_SECS));
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the branch scope
    pub fn with_branch(mut self, branch_id: BranchId) -> Self {
        self.branch_id = Some(branch_id);
        self
    }

    /// Set the kitchen refresh interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.kitchen_poll_interval = interval;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://pos.local/api")
            .with_token("abc")
            .with_branch(2)
            .with_timeout(5)
            .with_poll_interval(Duration::from_secs(10));

        assert_eq!(config.base_url, "http://pos.local/api");
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.branch_id, Some(2));
        assert_eq!(config.timeout, 5);
        assert_eq!(config.kitchen_poll_interval, Duration::from_secs(10));
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, 30);
        assert_eq!(config.kitchen_poll_interval, Duration::from_secs(30));
        assert!(config.token.is_none());
    }
}
