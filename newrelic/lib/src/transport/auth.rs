//! Credential-injecting transport decorator.

use std::fmt;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Request, Response};

use super::Transport;
use crate::error::{ConfigError, TransportError};

/// Header carrying the New Relic REST API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// User-agent sent on every request.
pub const USER_AGENT: &str = "newrelic_exporter;rust";

/// Wraps another [`Transport`] and stamps credentials on every request.
///
/// Both headers replace any value already present on the request. The
/// response or error of the wrapped transport is returned untouched.
pub struct AuthTransport<T> {
    inner: T,
    api_key: HeaderValue,
}

impl<T: Transport> AuthTransport<T> {
    /// Wraps `inner`, sending `api_key` verbatim on every request.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidApiKey`] if the key cannot be carried in
    /// an HTTP header (e.g. it contains a newline).
    pub fn new(inner: T, api_key: &str) -> Result<Self, ConfigError> {
        let mut api_key =
            HeaderValue::from_str(api_key).map_err(|_| ConfigError::InvalidApiKey)?;
        api_key.set_sensitive(true);

        Ok(Self { inner, api_key })
    }

    /// Returns the wrapped transport.
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: Clone> Clone for AuthTransport<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            api_key: self.api_key.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for AuthTransport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthTransport")
            .field("inner", &self.inner)
            .field("api_key", &"[redacted]")
            .finish()
    }
}

impl<T: Transport> Transport for AuthTransport<T> {
    async fn send(&self, mut request: Request) -> Result<Response, TransportError> {
        let headers = request.headers_mut();
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            self.api_key.clone(),
        );
        headers.insert(
            reqwest::header::USER_AGENT,
            HeaderValue::from_static(USER_AGENT),
        );

        self.inner.send(request).await
    }
}
