//! Image search provider abstraction.
//!
//! One outbound query per call; the fallback ladder lives in
//! `services::photos`, this seam only answers "first photo URL for this
//! query, if any".

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;
use thiserror::Error;

const PEXELS_API_URL: &str = "https://api.pexels.com/v1/search";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ImageSearchError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned status {0}")]
    BadStatus(u16),

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// A hosted photo-search service.
#[async_trait]
pub trait ImageSearchProvider: Send + Sync + std::fmt::Debug {
    /// Search for one landscape photo. `Ok(None)` means the query succeeded
    /// but matched nothing.
    async fn search(&self, query: &str) -> Result<Option<String>, ImageSearchError>;

    fn provider_name(&self) -> &'static str;
}

/// Pexels photo-search client.
#[derive(Debug)]
pub struct PexelsClient {
    api_key: String,
    client: reqwest::Client,
}

impl PexelsClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PexelsResponse {
    #[serde(default)]
    photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
struct PexelsPhoto {
    src: PexelsPhotoSrc,
}

#[derive(Debug, Deserialize)]
struct PexelsPhotoSrc {
    large: String,
}

#[async_trait]
impl ImageSearchProvider for PexelsClient {
    async fn search(&self, query: &str) -> Result<Option<String>, ImageSearchError> {
        let response = self
            .client
            .get(PEXELS_API_URL)
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("orientation", "landscape"),
            ])
            .header("Authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| ImageSearchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageSearchError::BadStatus(status.as_u16()));
        }

        let data: PexelsResponse = response
            .json()
            .await
            .map_err(|e| ImageSearchError::ParseError(e.to_string()))?;

        Ok(data.photos.into_iter().next().map(|p| p.src.large))
    }

    fn provider_name(&self) -> &'static str {
        "pexels"
    }
}

/// Deterministic image search for tests.
///
/// Queries containing a registered substring resolve to its URL; queries
/// registered as failing return an error; everything else matches nothing.
#[derive(Debug, Default)]
pub struct FakeImageSearch {
    hits: RwLock<HashMap<String, String>>,
    failing: RwLock<Vec<String>>,
    fail_all: bool,
}

impl FakeImageSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose every query errors out.
    pub fn always_failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn add_hit(&mut self, query_contains: &str, url: &str) {
        self.hits
            .write()
            .unwrap()
            .insert(query_contains.to_string(), url.to_string());
    }

    /// Make queries containing the given substring return an error.
    pub fn add_failure(&mut self, query_contains: &str) {
        self.failing.write().unwrap().push(query_contains.to_string());
    }
}

#[async_trait]
impl ImageSearchProvider for FakeImageSearch {
    async fn search(&self, query: &str) -> Result<Option<String>, ImageSearchError> {
        if self.fail_all {
            return Err(ImageSearchError::BadStatus(500));
        }

        for pattern in self.failing.read().unwrap().iter() {
            if query.contains(pattern.as_str()) {
                return Err(ImageSearchError::BadStatus(500));
            }
        }

        for (pattern, url) in self.hits.read().unwrap().iter() {
            if query.contains(pattern.as_str()) {
                return Ok(Some(url.clone()));
            }
        }

        Ok(None)
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fake_returns_hit_for_matching_query() {
        let mut fake = FakeImageSearch::new();
        fake.add_hit("tacos", "https://example.com/tacos.jpg");

        let url = fake.search("tacos mexicanos food").await.unwrap();
        assert_eq!(url.as_deref(), Some("https://example.com/tacos.jpg"));
        assert!(fake.search("pizza food").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn fake_failure_patterns_error() {
        let mut fake = FakeImageSearch::new();
        fake.add_failure("tacos");
        assert!(fake.search("tacos food").await.is_err());
    }

    #[tokio::test]
    async fn fake_always_failing_errors_every_query() {
        let fake = FakeImageSearch::always_failing();
        assert!(fake.search("anything").await.is_err());
    }
}
