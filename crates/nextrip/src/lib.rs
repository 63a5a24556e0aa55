//! Client library for the Metro Transit NexTrip API
//!
//! Builds and issues GET requests against a configurable base URL and
//! decodes JSON responses into caller-supplied types. The crate is the
//! request-construction pipeline and nothing more: no caching, no retries,
//! no transit-domain models — response payloads deserialize opaquely into
//! whatever shape the caller asks for.
//!
//! # Architecture
//!
//! [`NexTripClient`] holds a finalized [`NexTripConfig`] (unset host/scheme
//! fall back to the service defaults) and dispatches through an injectable
//! [`HttpTransport`], so tests can substitute a deterministic double for
//! real network I/O. [`ApiRequest`] is the transient, per-call request value
//! assembled from method, path, query parameters, and headers.
//!
//! # Example
//!
//! ```rust,ignore
//! use nextrip::{NexTripClient, NexTripConfig};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Provider {
//!     #[serde(rename = "Text")]
//!     text: String,
//!     #[serde(rename = "Value")]
//!     value: String,
//! }
//!
//! let client = NexTripClient::new(NexTripConfig::default());
//! let providers: Vec<Provider> = client.get("/Providers").await?;
//! ```

mod client;
mod config;
mod error;
mod request;
mod transport;

pub use client::NexTripClient;
pub use config::{DEFAULT_BASE_PATH, DEFAULT_HOST, DEFAULT_SCHEME, NexTripConfig};
pub use error::NexTripError;
pub use request::ApiRequest;
pub use transport::{BoxError, HttpTransport, ReqwestTransport};

pub use reqwest::Method;
