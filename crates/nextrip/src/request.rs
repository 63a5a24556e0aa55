//! Pending request assembly

use reqwest::Method;
use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

use crate::error::NexTripError;

/// An in-memory, not-yet-sent HTTP request
///
/// Created by [`NexTripClient::request`](crate::NexTripClient::request), one
/// per call and discarded after execution. Query parameters and headers are
/// accumulated through the builder methods and serialized into a
/// [`reqwest::Request`] by [`into_http`](Self::into_http).
#[derive(Debug)]
pub struct ApiRequest {
    method: Method,
    scheme: String,
    host: String,
    path: String,
    params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, scheme: &str, host: &str, path: String) -> Self {
        Self {
            method,
            scheme: scheme.to_string(),
            host: host.to_string(),
            path,
            params: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter
    ///
    /// Repeated keys are kept; serialization orders parameters by key and
    /// preserves insertion order within one key.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Append a header, attached to the outgoing request verbatim
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request body
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize into a transport-level request
    ///
    /// The URL is `scheme://host` + path, with the query parameters
    /// form-urlencoded in key order. Fails if the URL or a header is
    /// structurally invalid; no other validation is applied.
    pub fn into_http(mut self) -> Result<reqwest::Request, NexTripError> {
        let mut url = Url::parse(&format!("{}://{}{}", self.scheme, self.host, self.path))?;

        if !self.params.is_empty() {
            self.params.sort_by(|a, b| a.0.cmp(&b.0));
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.params {
                pairs.append_pair(key, value);
            }
        }

        let mut request = reqwest::Request::new(self.method, url);

        for (name, value) in &self.headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| NexTripError::InvalidHeader(e.to_string()))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| NexTripError::InvalidHeader(e.to_string()))?;
            request.headers_mut().append(name, value);
        }

        if let Some(body) = self.body {
            *request.body_mut() = Some(body.into());
        }

        Ok(request)
    }
}
