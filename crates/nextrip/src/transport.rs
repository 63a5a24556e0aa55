//! HTTP transport abstraction

use std::fmt;

use async_trait::async_trait;

/// Boxed error returned by transports
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Capability for physically executing HTTP requests
///
/// A transport sends a fully assembled request and returns the raw response,
/// or whatever error the underlying stack produced, unmodified. The client
/// treats it as an opaque capability, so tests can substitute a
/// deterministic double without real network I/O.
#[async_trait]
pub trait HttpTransport: fmt::Debug + Send + Sync {
    /// Execute one request and return the raw response
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError>;
}

/// Default transport backed by a shared [`reqwest::Client`]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an existing client, keeping its pool, timeout, and TLS settings
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError> {
        Ok(self.client.execute(request).await?)
    }
}
