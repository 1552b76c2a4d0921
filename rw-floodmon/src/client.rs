//! Async HTTP client for the Environment Agency flood-monitoring API.
//!
//! Works on both native targets (reqwest over TLS) and `wasm32` (reqwest's
//! fetch backend). Callers own the `reqwest::Client`; this type only carries
//! endpoint configuration.

use chrono::{DateTime, Utc};
use log::warn;
use reqwest::{Client, StatusCode};

use crate::reading::{Reading, ReadingsResponse};
use crate::request::ReadingsRequest;
use crate::station::{Station, StationListResponse};

/// Public base URL of the real-time flood-monitoring API.
pub const DEFAULT_BASE_URL: &str = "https://environment.data.gov.uk/flood-monitoring";

/// Errors from the flood-monitoring API client.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response status: {0}")]
    Status(StatusCode),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Endpoint configuration for the flood-monitoring API.
#[derive(Debug, Clone)]
pub struct FloodMonClient {
    base_url: String,
    relay_prefix: Option<String>,
}

impl Default for FloodMonClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FloodMonClient {
    /// Client against the public Environment Agency endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a non-default base URL (mirrors, test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        FloodMonClient {
            base_url: base_url.into(),
            relay_prefix: None,
        }
    }

    /// Route every request through a cross-origin forwarding relay. The
    /// relay sees the full request URL appended to `prefix` verbatim, e.g.
    /// `https://corsproxy.example/?` + the direct URL.
    pub fn with_relay(mut self, prefix: impl Into<String>) -> Self {
        self.relay_prefix = Some(prefix.into());
        self
    }

    fn url(&self, path_and_query: &str) -> String {
        let direct = format!("{}{}", self.base_url, path_and_query);
        match &self.relay_prefix {
            Some(prefix) => format!("{}{}", prefix, direct),
            None => direct,
        }
    }

    /// Fetch the full station catalog. One request, no retry; stations come
    /// back in the order the catalog returns them.
    pub async fn fetch_stations(&self, client: &Client) -> Result<Vec<Station>, FetchError> {
        let url = self.url("/id/stations");
        let response = client.get(&url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status()));
        }
        let body = response.text().await?;
        Ok(StationListResponse::parse(&body)?)
    }

    /// Issue a single readings request for one station.
    pub async fn fetch_readings(
        &self,
        client: &Client,
        station_id: &str,
        request: &ReadingsRequest,
    ) -> Result<Vec<Reading>, FetchError> {
        let url = self.url(&format!(
            "/id/stations/{}/readings?{}",
            station_id,
            request.query()
        ));
        let response = client.get(&url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status()));
        }
        let body = response.text().await?;
        Ok(ReadingsResponse::parse(&body)?)
    }

    /// Fetch recent readings for one station by running the attempt plan:
    /// a `since=`-bounded request, then one unbounded fallback. The first
    /// attempt that yields readings wins. An empty bounded result falls
    /// through to the fallback; if the fallback is also empty but any
    /// attempt succeeded, the result is an empty set (the station is
    /// silent, not unreachable). Only when every attempt errors is the
    /// last error returned.
    pub async fn fetch_recent_readings(
        &self,
        client: &Client,
        station_id: &str,
        window_start: DateTime<Utc>,
    ) -> Result<Vec<Reading>, FetchError> {
        let mut last_error: Option<FetchError> = None;
        let mut any_success = false;

        for request in ReadingsRequest::plan(window_start) {
            match self.fetch_readings(client, station_id, &request).await {
                Ok(readings) if !readings.is_empty() => return Ok(readings),
                Ok(_) => {
                    warn!("Empty readings response for {} ({:?})", station_id, request);
                    any_success = true;
                }
                Err(e) => {
                    warn!("Readings request failed for {} ({:?}): {}", station_id, request, e);
                    last_error = Some(e);
                }
            }
        }

        if any_success {
            return Ok(Vec::new());
        }
        Err(last_error.expect("attempt plan is never empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::{FloodMonClient, DEFAULT_BASE_URL};
    use crate::request::ReadingsRequest;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_direct_url() {
        let api = FloodMonClient::new();
        assert_eq!(
            api.url("/id/stations"),
            format!("{}/id/stations", DEFAULT_BASE_URL)
        );
    }

    #[test]
    fn test_relay_wraps_full_url() {
        let api = FloodMonClient::new().with_relay("https://corsproxy.example/?");
        assert_eq!(
            api.url("/id/stations"),
            format!("https://corsproxy.example/?{}/id/stations", DEFAULT_BASE_URL)
        );
    }

    #[test]
    fn test_readings_path() {
        let api = FloodMonClient::with_base_url("http://localhost:8080");
        let start = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        let url = api.url(&format!(
            "/id/stations/{}/readings?{}",
            "1029TH",
            ReadingsRequest::Since(start).query()
        ));
        assert!(url.starts_with("http://localhost:8080/id/stations/1029TH/readings?"));
        assert!(url.contains("since=2026-08-05T12:00:00Z"));
    }
}
