//! Transport-level errors.

use thiserror::Error;

/// Errors from the transport layer.
///
/// A transport error means no response was received. The client never
/// retries; callers decide what to do with these.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request failed inside `reqwest` (network, protocol or timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to establish a connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl TransportError {
    /// Returns `true` if the request exceeded the client timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Request(e) => e.is_timeout(),
            Self::Connection(_) => false,
        }
    }

    /// Returns `true` if no connection could be established.
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Request(e) => e.is_connect(),
            Self::Connection(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_is_connect() {
        let err = TransportError::Connection("connection refused".to_string());
        assert!(err.is_connect());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_connection_display() {
        let err = TransportError::Connection("connection refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: connection refused");
    }
}
