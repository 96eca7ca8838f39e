//! Potter API client
//!
//! Four read endpoints against a fixed base URL. Three take the API key as
//! a query parameter; `sortingHat` does not. Requests carry a bounded
//! timeout; any transport failure, non-success status, or undecodable body
//! is fatal to the whole sourcing run — there are no retries here.

use crate::config::SourceConfig;
use crate::record::{Character, House, SortingHat, Spell};
use crate::source::{SourceError, SourceResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// HTTP client for the Potter REST API.
pub struct PotterClient {
    http: Client,
    base_url: String,
    key: String,
}

impl PotterClient {
    /// Build a client from the connector configuration.
    pub fn new(config: &SourceConfig) -> SourceResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            key: config.key.clone(),
        })
    }

    /// `GET /houses?key={key}`
    pub async fn houses(&self) -> SourceResult<Vec<House>> {
        self.get_json("houses", true).await
    }

    /// `GET /characters?key={key}`
    pub async fn characters(&self) -> SourceResult<Vec<Character>> {
        self.get_json("characters", true).await
    }

    /// `GET /spells?key={key}`
    pub async fn spells(&self) -> SourceResult<Vec<Spell>> {
        self.get_json("spells", true).await
    }

    /// `GET /sortingHat` — the one unkeyed endpoint.
    pub async fn sorting_hat(&self) -> SourceResult<SortingHat> {
        self.get_json("sortingHat", false).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        keyed: bool,
    ) -> SourceResult<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "fetching");

        let mut request = self.http.get(&url);
        if keyed {
            request = request.query(&[("key", self.key.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|source| SourceError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status { endpoint, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| SourceError::Transport { endpoint, source })?;

        serde_json::from_slice(&body).map_err(|source| SourceError::Decode { endpoint, source })
    }
}
