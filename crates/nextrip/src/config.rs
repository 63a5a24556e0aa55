//! Client configuration

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::transport::HttpTransport;

/// Default host of the NexTrip API server
pub const DEFAULT_HOST: &str = "svc.metrotransit.org";

/// Default URI scheme for the NexTrip API server
pub const DEFAULT_SCHEME: &str = "http";

/// Default base path prepended to every request path
pub const DEFAULT_BASE_PATH: &str = "/NexTrip";

/// Configuration for a [`NexTripClient`](crate::NexTripClient)
///
/// Every field is optional in serialized form; absent fields take the fixed
/// defaults. The client copies the configuration at construction, so later
/// changes to the caller's value have no effect on an existing client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NexTripConfig {
    /// Authority of the NexTrip API server, with an optional port
    /// (e.g. `svc.metrotransit.org` or `127.0.0.1:8080`). An empty host
    /// falls back to [`DEFAULT_HOST`] at client construction.
    #[serde(default = "default_host")]
    pub host: String,

    /// URI scheme for the NexTrip API server. An empty scheme falls back to
    /// [`DEFAULT_SCHEME`] at client construction.
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Base path prepended to every request path. Only an absent field takes
    /// [`DEFAULT_BASE_PATH`]; an explicitly empty base path is kept as-is
    /// and addresses a service mounted at the root.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Transport used to execute requests. When unset, the client installs a
    /// [`ReqwestTransport`](crate::ReqwestTransport) with standard settings.
    /// Timeouts are the transport's concern, not this crate's.
    #[serde(skip)]
    pub transport: Option<Arc<dyn HttpTransport>>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

impl Default for NexTripConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            scheme: default_scheme(),
            base_path: default_base_path(),
            transport: None,
        }
    }
}
