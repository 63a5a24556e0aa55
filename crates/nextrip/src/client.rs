//! NexTrip API client
//!
//! Merges caller configuration with the fixed service defaults, assembles
//! request URLs, and translates HTTP outcomes into decoded data or errors.

use std::sync::Arc;

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::{DEFAULT_HOST, DEFAULT_SCHEME, NexTripConfig};
use crate::error::NexTripError;
use crate::request::ApiRequest;
use crate::transport::{HttpTransport, ReqwestTransport};

/// A client for the NexTrip API
///
/// Holds a private copy of the finalized configuration together with the
/// transport used to execute requests. All state is read-only after
/// construction, so a single client is safe to share across concurrent
/// calls to the extent the transport is.
#[derive(Debug)]
pub struct NexTripClient {
    config: NexTripConfig,
    transport: Arc<dyn HttpTransport>,
}

impl NexTripClient {
    /// Create a client from a configuration value
    ///
    /// Empty `host` and `scheme` fields fall back to the fixed defaults; an
    /// empty `base_path` is kept as-is. When no transport is configured, a
    /// [`ReqwestTransport`] with standard settings is installed.
    ///
    /// Construction never fails: a malformed host or scheme is only
    /// discovered at request time, as a URL construction error.
    #[must_use]
    pub fn new(mut config: NexTripConfig) -> Self {
        if config.host.is_empty() {
            config.host = DEFAULT_HOST.to_string();
        }
        if config.scheme.is_empty() {
            config.scheme = DEFAULT_SCHEME.to_string();
        }

        let transport = config
            .transport
            .take()
            .unwrap_or_else(|| Arc::new(ReqwestTransport::default()));

        Self { config, transport }
    }

    /// Start a request for `path`, appended verbatim to the base path
    ///
    /// No normalization is applied to the joined path; callers supply
    /// well-formed path segments.
    #[must_use]
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(
            method,
            &self.config.scheme,
            &self.config.host,
            format!("{}{}", self.config.base_path, path),
        )
    }

    /// Execute a request through the configured transport
    ///
    /// Returns the raw response. Transport errors pass through with their
    /// source intact; there is no retry or backoff.
    pub async fn execute(&self, request: ApiRequest) -> Result<Response, NexTripError> {
        let request = request.into_http()?;
        debug!(method = %request.method(), url = %request.url(), "Dispatching request");
        self.transport
            .execute(request)
            .await
            .map_err(NexTripError::Transport)
    }

    /// Issue a GET request against `endpoint` and decode the JSON response
    ///
    /// Any status other than 200, including other 2xx codes, fails with the
    /// status and the raw body captured for diagnostics. A body read failure
    /// on that path degrades the diagnostic body to the empty string rather
    /// than masking the status.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, NexTripError> {
        let request = self.request(Method::GET, endpoint);
        let response = self.execute(request).await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(NexTripError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Decoding response body");
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_host_and_scheme_fall_back_to_defaults() {
        let client = NexTripClient::new(NexTripConfig {
            host: String::new(),
            scheme: String::new(),
            ..NexTripConfig::default()
        });
        assert_eq!(client.config.host, "svc.metrotransit.org");
        assert_eq!(client.config.scheme, "http");
    }

    #[test]
    fn test_supplied_host_and_scheme_are_preserved() {
        let client = NexTripClient::new(NexTripConfig {
            host: "transit.example.org:8080".to_string(),
            scheme: "https".to_string(),
            ..NexTripConfig::default()
        });
        assert_eq!(client.config.host, "transit.example.org:8080");
        assert_eq!(client.config.scheme, "https");
    }

    #[test]
    fn test_empty_base_path_is_not_backfilled() {
        let client = NexTripClient::new(NexTripConfig {
            base_path: String::new(),
            ..NexTripConfig::default()
        });
        assert_eq!(client.config.base_path, "");

        let http = client.request(Method::GET, "/Routes").into_http().unwrap();
        assert_eq!(http.url().as_str(), "http://svc.metrotransit.org/Routes");
    }

    #[test]
    fn test_default_transport_is_installed() {
        let client = NexTripClient::new(NexTripConfig::default());
        assert!(format!("{:?}", client.transport).contains("ReqwestTransport"));
    }

    #[test]
    fn test_request_url_joins_base_path_and_path() {
        let client = NexTripClient::new(NexTripConfig::default());
        let http = client.request(Method::GET, "/Providers").into_http().unwrap();
        assert_eq!(
            http.url().as_str(),
            "http://svc.metrotransit.org/NexTrip/Providers"
        );
    }
}
