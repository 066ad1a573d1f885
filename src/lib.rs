//! Rust SDK for the BridgeTrace API.
//!
//! A thin client over the service's HTTP endpoints: it builds requests,
//! attaches tenant and authentication headers, and returns the decoded
//! JSON response verbatim. Tracing semantics (hops, amount thresholds,
//! risk scoring) are owned entirely by the remote service.
//!
//! ```no_run
//! use bridgetrace_sdk::{ClientConfig, TraceClient, TraceRequest};
//!
//! # async fn run() -> Result<(), bridgetrace_sdk::SdkError> {
//! let client = TraceClient::new(ClientConfig::new("https://api.example.com"));
//! let result = client.trace(TraceRequest::new("acct-1")).await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::TraceClient;
pub use config::{ClientConfig, RiskQuery, TraceRequest};
pub use error::SdkError;
