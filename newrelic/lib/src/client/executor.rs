//! Request construction and execution with tracing instrumentation.
//!
//! This module provides the [`Client`] struct for building requests against
//! the New Relic API base URL and executing them through an authenticating
//! transport.

use std::fmt;

use reqwest::{Method, Request};
use serde::de::DeserializeOwned;
use tracing::{debug, error, field, info_span, warn, Instrument, Span};
use url::Url;

use super::ApiResponse;
use crate::error::{ApiError, ConfigError, DecodeError, RequestError, TransportError};
use crate::transport::{AuthTransport, ReqwestTransport, Transport};

/// Async client for the New Relic REST API.
///
/// Every request is sent through an [`AuthTransport`], which stamps the API
/// key and user-agent headers before delegating to the wrapped transport.
/// The default transport is a pooled `reqwest::Client` with a fixed 10 second
/// timeout.
///
/// A `Client` holds no per-request state and can be shared across tasks.
pub struct Client<T = ReqwestTransport> {
    base_url: Url,
    transport: AuthTransport<T>,
    span: Option<Span>,
}

impl Client {
    /// Creates a client using the default `reqwest` transport.
    ///
    /// ## Arguments
    ///
    /// * `api_url` - Base URL every request path is resolved against.
    /// * `api_key` - REST API key, sent verbatim as `X-Api-Key`.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] if the base URL does not parse, the key is
    /// not a valid header value, or the HTTP client cannot be built. These
    /// are startup errors; hosts should abort on them.
    pub fn new(api_url: &str, api_key: &str) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(api_url)?;
        let transport = ReqwestTransport::new()?;

        Self::from_parts(base_url, api_key, transport)
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends through `transport` instead of the default.
    ///
    /// The transport is still wrapped in an [`AuthTransport`], so injected
    /// transports observe the credential headers.
    ///
    /// ## Errors
    ///
    /// Same as [`Client::new`], minus HTTP client construction.
    pub fn with_transport(
        api_url: &str,
        api_key: &str,
        transport: T,
    ) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(api_url)?;
        Self::from_parts(base_url, api_key, transport)
    }

    fn from_parts(base_url: Url, api_key: &str, transport: T) -> Result<Self, ConfigError> {
        let transport = AuthTransport::new(transport, api_key)?;
        debug!(base_url = %base_url, "New Relic client ready");

        Ok(Self {
            base_url,
            transport,
            span: None,
        })
    }

    /// Sets the parent span for all request spans emitted by this client.
    ///
    /// Without one, request spans attach to whatever span is current at the
    /// call site.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the authenticating transport.
    pub fn transport(&self) -> &AuthTransport<T> {
        &self.transport
    }

    /// Builds a bodyless request for `path`, resolved against the base URL.
    ///
    /// Relative paths follow standard reference resolution, so with a base of
    /// `https://api.example.com/` the path `v2/applications.json` becomes
    /// `https://api.example.com/v2/applications.json`. An empty method name
    /// means `GET`.
    ///
    /// ## Errors
    ///
    /// Returns a [`RequestError`] if the method is not a valid HTTP token or
    /// the path does not resolve.
    pub fn new_request(&self, method: &str, path: &str) -> Result<Request, RequestError> {
        let method = if method.is_empty() {
            Method::GET
        } else {
            Method::from_bytes(method.as_bytes()).map_err(|_| RequestError::InvalidMethod {
                method: method.to_string(),
            })?
        };

        let url = self
            .base_url
            .join(path)
            .map_err(|source| RequestError::InvalidPath {
                path: path.to_string(),
                source,
            })?;

        Ok(Request::new(method, url))
    }

    /// Sends `request` and decodes the JSON body into `D`.
    ///
    /// The body is read to the end and released on every path. Only the
    /// first JSON value of the body is decoded; trailing bytes are ignored.
    ///
    /// ## Returns
    ///
    /// An [`ApiResponse`] whenever the server answered, whatever the status.
    /// Decode failures live inside it so the status stays inspectable.
    ///
    /// ## Errors
    ///
    /// Returns the transport's [`TransportError`] unchanged when no response
    /// was received (network failure, timeout, refused connection).
    pub async fn execute<D>(&self, request: Request) -> Result<ApiResponse<D>, TransportError>
    where
        D: DeserializeOwned,
    {
        let parent = self.span.clone().unwrap_or_else(Span::current);
        let span = info_span!(
            parent: &parent,
            "newrelic_request",
            http.method = %request.method(),
            http.url = %request.url(),
            http.status_code = field::Empty,
            otel.kind = "client",
        );

        self.round_trip(request, span.clone()).instrument(span).await
    }

    /// Builds and executes a request in one step.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Transport`]. Decode
    /// failures stay inside the returned [`ApiResponse`].
    pub async fn fetch<D>(&self, method: &str, path: &str) -> Result<ApiResponse<D>, ApiError>
    where
        D: DeserializeOwned,
    {
        let request = self.new_request(method, path)?;
        Ok(self.execute(request).await?)
    }

    async fn round_trip<D>(
        &self,
        request: Request,
        span: Span,
    ) -> Result<ApiResponse<D>, TransportError>
    where
        D: DeserializeOwned,
    {
        let mut response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, "New Relic API request failed");
                return Err(e);
            }
        };

        let status = response.status();
        span.record("http.status_code", status.as_u16());

        let version = response.version();
        let url = response.url().clone();
        let headers = std::mem::take(response.headers_mut());

        let body = match response.bytes().await {
            Ok(bytes) => decode_json(&bytes),
            Err(e) => {
                warn!(error = %e, "An error occurred reading the response body");
                Err(DecodeError::Body(e))
            }
        };

        if let Err(e) = &body {
            debug!(error = %e, "Response body did not decode");
        }

        Ok(ApiResponse::new(status, version, url, headers, body))
    }
}

impl<T: Clone> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: self.transport.clone(),
            span: self.span.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

/// Parses the API base URL, logging the failure before returning it.
fn parse_base_url(api_url: &str) -> Result<Url, ConfigError> {
    let parsed = Url::parse(api_url).and_then(|url| {
        if url.cannot_be_a_base() {
            Err(url::ParseError::RelativeUrlWithCannotBeABaseBase)
        } else {
            Ok(url)
        }
    });

    parsed.map_err(|source| {
        error!(url = api_url, error = %source, "Failed to parse New Relic API URL");
        ConfigError::invalid_base_url(api_url, source)
    })
}

/// Decodes the first JSON value in `body` into `D`.
fn decode_json<D: DeserializeOwned>(body: &[u8]) -> Result<D, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    Ok(D::deserialize(&mut deserializer)?)
}
