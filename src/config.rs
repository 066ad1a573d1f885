//! Client configuration and per-call parameter types.
//!
//! All types derive Serde traits so they can be deserialized from config
//! files or built in code. Defaults match the service's documented values.

use serde::{Deserialize, Serialize};

/// Connection configuration for [`TraceClient`](crate::TraceClient).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the BridgeTrace API (e.g., "https://api.example.com").
    pub base_url: String,

    /// API key sent as `X-API-Key`. Absent means unauthenticated.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Tenant namespace sent as `X-Tenant-ID` with every request.
    #[serde(default = "default_tenant")]
    pub tenant_id: String,
}

impl ClientConfig {
    /// Create a config for `base_url` with the default tenant and no API key.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            tenant_id: default_tenant(),
        }
    }
}

fn default_tenant() -> String {
    "public".to_string()
}

/// Parameters for a trace call, serialized verbatim as the request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceRequest {
    /// Identifier to start the trace from. Opaque to this client.
    pub source_id: String,

    /// Maximum traversal depth.
    #[serde(default = "default_max_hops")]
    pub max_hops: u32,

    /// Minimum transfer amount to follow.
    #[serde(default)]
    pub min_amount: f64,
}

impl TraceRequest {
    /// Trace parameters for `source_id` with default depth (5) and amount
    /// threshold (0).
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            max_hops: default_max_hops(),
            min_amount: 0.0,
        }
    }
}

fn default_max_hops() -> u32 {
    5
}

/// Query parameters for a risk lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskQuery {
    /// Analysis window in days.
    pub days: u32,
}

impl Default for RiskQuery {
    fn default() -> Self {
        Self { days: 30 }
    }
}
