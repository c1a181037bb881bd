//! Decoded responses.

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Version};
use url::Url;

use crate::error::DecodeError;

/// A response that reached the client, with its body already decoded.
///
/// The body has been read to the end and released by the time this value
/// exists. A decode failure is kept alongside the response metadata so the
/// status code and headers stay inspectable.
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    version: Version,
    url: Url,
    headers: HeaderMap,
    body: Result<T, DecodeError>,
}

impl<T> ApiResponse<T> {
    pub(crate) fn new(
        status: StatusCode,
        version: Version,
        url: Url,
        headers: HeaderMap,
        body: Result<T, DecodeError>,
    ) -> Self {
        Self {
            status,
            version,
            url,
            headers,
            body,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// HTTP version of the response.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Final URL of the response.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The decode outcome, by reference.
    pub fn body(&self) -> Result<&T, &DecodeError> {
        self.body.as_ref()
    }

    /// Returns the decode error, if decoding failed.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        self.body.as_ref().err()
    }

    /// Consumes the response and returns the decoded value.
    ///
    /// ## Errors
    ///
    /// Returns the [`DecodeError`] if the body could not be read or decoded.
    pub fn into_result(self) -> Result<T, DecodeError> {
        self.body
    }

    /// Consumes the response and splits it into status and decode outcome.
    pub fn into_parts(self) -> (StatusCode, Result<T, DecodeError>) {
        (self.status, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: Result<u32, DecodeError>) -> ApiResponse<u32> {
        ApiResponse::new(
            StatusCode::OK,
            Version::HTTP_11,
            Url::parse("https://api.example.com/v2/applications.json").unwrap(),
            HeaderMap::new(),
            body,
        )
    }

    #[test]
    fn test_decoded_value() {
        let resp = response(Ok(7));
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.decode_error().is_none());
        assert_eq!(resp.body().ok(), Some(&7));
        assert_eq!(resp.into_result().unwrap(), 7);
    }

    #[test]
    fn test_decode_error_keeps_status() {
        let json_err = serde_json::from_str::<u32>("not-json").unwrap_err();
        let resp = response(Err(DecodeError::Json(json_err)));

        assert!(resp.decode_error().is_some());
        let (status, body) = resp.into_parts();
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_err());
    }
}
