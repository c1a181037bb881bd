//! Layered error types for the New Relic client.
//!
//! Each stage of a round-trip has its own error type:
//! - [`ConfigError`] - Client construction failures (bad base URL, bad key)
//! - [`RequestError`] - Request construction failures (method, path)
//! - [`TransportError`] - Network, timeout and connection failures
//! - [`DecodeError`] - Body read and JSON decode failures
//! - [`ApiError`] - Top-level aggregate for callers that want one type

mod api_error;
mod config_error;
mod decode_error;
mod request_error;
mod transport_error;

pub use api_error::ApiError;
pub use config_error::ConfigError;
pub use decode_error::DecodeError;
pub use request_error::RequestError;
pub use transport_error::TransportError;
