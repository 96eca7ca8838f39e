//! Connector configuration

use crate::source::{SourceError, SourceResult};
use std::time::Duration;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://www.potterapi.com/v1";

/// Default per-request timeout. The upstream API promises none; an
/// unbounded request would stall the whole sourcing run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for one sourcing run.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// API key. Required by every endpoint except `sortingHat`.
    pub key: String,
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout, surfaced as a transport failure when exceeded.
    pub timeout: Duration,
}

impl SourceConfig {
    /// Configuration with the default host and timeout.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the connector at a different host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reject a missing key before any request is issued.
    pub fn validate(&self) -> SourceResult<()> {
        if self.key.trim().is_empty() {
            return Err(SourceError::MissingKey);
        }
        Ok(())
    }
}
