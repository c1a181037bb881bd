//! Transport layer.
//!
//! A [`Transport`] performs one round-trip: it sends a request and yields the
//! response, or a [`TransportError`] when no response was received. The
//! default implementation is [`ReqwestTransport`]; [`AuthTransport`] is a
//! decorator that adds New Relic credentials before delegating.

mod auth;

use std::future::Future;
use std::time::Duration;

use reqwest::{Request, Response};

use crate::error::{ConfigError, TransportError};

pub use auth::{AuthTransport, API_KEY_HEADER, USER_AGENT};

/// Overall timeout applied to every request by the default transport.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A single round-trip capability.
///
/// Implementations must not retry and must not translate errors coming from
/// lower layers.
///
/// ## Examples
///
/// ```rust
/// use newrelic_lib::error::TransportError;
/// use newrelic_lib::transport::Transport;
/// use reqwest::{Request, Response};
///
/// struct Refusing;
///
/// impl Transport for Refusing {
///     async fn send(&self, _request: Request) -> Result<Response, TransportError> {
///         Err(TransportError::Connection("refused".to_string()))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends `request` and waits for the response head.
    fn send(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send;
}

/// Default transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds the default transport with the fixed [`REQUEST_TIMEOUT`].
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self { client })
    }
}

impl From<reqwest::Client> for ReqwestTransport {
    fn from(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        Ok(self.client.execute(request).await?)
    }
}
