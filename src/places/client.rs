//! HTTP client for the external place-search service (Kakao Local
//! keyword search). The only uncontrolled external dependency in the
//! app, so the request carries a bounded timeout and every failure mode
//! maps to a distinct error. No retries; each failure surfaces once.

use std::time::Duration;

use serde::Deserialize;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::place::{PlaceCandidate, RawPlace};
use crate::places::normalize::normalize_places;

pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    documents: Vec<RawPlace>,
}

pub struct PlaceClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl PlaceClient {
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.search_base_url.clone(),
            cfg.search_key(),
            cfg.search_timeout_secs,
        )
    }

    /// Raw upstream records for a query. Short-circuits on a blank query
    /// and on a missing credential before any network traffic.
    pub fn fetch_raw(&self, query: &str, size: u32) -> AppResult<Vec<RawPlace>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::EmptyQuery);
        }
        if self.api_key.is_empty() {
            return Err(AppError::ConfigMissing("KAKAO_REST_API_KEY".into()));
        }

        let size_s = size.to_string();
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("query", query), ("size", size_s.as_str())])
            .header("Authorization", format!("KakaoAK {}", self.api_key))
            .timeout(self.timeout)
            .send()
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.as_u16() == 429 {
            return Err(AppError::UpstreamUnavailable);
        }
        if !status.is_success() {
            return Err(AppError::UpstreamRequestFailed(status.as_u16()));
        }

        let body: SearchResponse = resp
            .json()
            .map_err(|e| AppError::Transport(format!("invalid response body: {}", e)))?;
        Ok(body.documents)
    }

    /// Normalized candidates for a query. Zero valid candidates is a
    /// distinct `NoResults` outcome, never an empty success.
    pub fn search(&self, query: &str, size: u32) -> AppResult<Vec<PlaceCandidate>> {
        let candidates = normalize_places(self.fetch_raw(query, size)?);
        if candidates.is_empty() {
            return Err(AppError::NoResults);
        }
        Ok(candidates)
    }
}
