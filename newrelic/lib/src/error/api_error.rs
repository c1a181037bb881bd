//! Top-level API error type.

use super::{ConfigError, DecodeError, RequestError, TransportError};
use thiserror::Error;

/// Top-level error type for all client operations.
///
/// Aggregates every stage of a round-trip so hosts can use a single error
/// type while still matching on the stage that failed.
///
/// ## Examples
///
/// ```rust
/// use newrelic_lib::error::ApiError;
///
/// fn exit_code(err: &ApiError) -> u8 {
///     match err {
///         ApiError::Config(_) => 2,
///         ApiError::Request(_) | ApiError::Transport(_) => 3,
///         ApiError::Decode(_) => 1,
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client construction failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request could not be built.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The request could not be sent or no response arrived.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body could not be read or decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
