//! Request construction errors.

use thiserror::Error;

/// Errors raised while building a request, before anything is sent.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The method name is not a valid HTTP method token.
    #[error("Invalid HTTP method: {method}")]
    InvalidMethod {
        /// The rejected method name.
        method: String,
    },

    /// The path could not be resolved against the base URL.
    #[error("Failed to resolve path '{path}': {source}")]
    InvalidPath {
        /// The rejected path.
        path: String,
        /// The underlying resolution failure.
        #[source]
        source: url::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_method_display() {
        let err = RequestError::InvalidMethod {
            method: "GE T".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid HTTP method: GE T");
    }

    #[test]
    fn test_invalid_path_display() {
        let err = RequestError::InvalidPath {
            path: "http://[::1".to_string(),
            source: url::ParseError::InvalidIpv6Address,
        };
        assert!(err.to_string().contains("http://[::1"));
    }
}
