//! Response body errors.

use thiserror::Error;

/// Errors while reading or decoding a response body.
///
/// A decode error is always reported next to the response it came from,
/// see [`ApiResponse`](crate::ApiResponse).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not valid JSON or does not match the target type.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body could not be read to completion.
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl DecodeError {
    /// Returns `true` if the body was read but did not decode.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}
