//! Authenticated client for the New Relic REST API.
//!
//! The `newrelic-lib` crate is the HTTP layer of the New Relic exporter. It
//! resolves API paths against a base URL, stamps the API key and user-agent
//! on every request, and decodes JSON bodies into caller-chosen types.
//!
//! ## Features
//!
//! - **Authenticating transport**: `X-Api-Key` and `User-Agent` on every call
//! - **Pluggable transports**: anything implementing [`Transport`] can sit
//!   under the credentials layer
//! - **Decode errors keep the response**: status and headers stay inspectable
//! - **Layered error handling**: one error type per round-trip stage
//!
//! Pagination, retries and rate limiting are left to callers.
//!
//! ## Example
//!
//! ```rust,no_run
//! use newrelic_lib::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("https://api.newrelic.com/", "my-api-key")?;
//! let response = client
//!     .fetch::<serde_json::Value>("GET", "v2/applications.json")
//!     .await?;
//!
//! println!("{}: {:?}", response.status(), response.body());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod transport;

// Re-exports for convenience
pub use client::{ApiResponse, Client};
pub use error::{ApiError, ConfigError, DecodeError, RequestError, TransportError};
pub use transport::{AuthTransport, ReqwestTransport, Transport, REQUEST_TIMEOUT, USER_AGENT};
