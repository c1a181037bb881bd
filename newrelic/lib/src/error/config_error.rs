//! Client construction errors.

use thiserror::Error;

/// Errors raised while constructing a [`Client`](crate::Client).
///
/// These indicate operator or programmer mistakes at startup. Hosts are
/// expected to abort rather than continue with a half-configured client.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API base URL could not be parsed.
    #[error("Failed to parse New Relic API URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The rejected input.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The API key is not a valid HTTP header value.
    #[error("Invalid API key format")]
    InvalidApiKey,

    /// The default HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ConfigError {
    /// Creates an invalid base URL error.
    pub fn invalid_base_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            source,
        }
    }
}
