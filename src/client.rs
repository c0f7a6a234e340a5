//! HTTP fetch client.
//!
//! Issues a single request for an [`EndpointDescriptor`], accepts only a
//! `200 OK` with a non-empty body, and decodes the body as JSON into the
//! caller's expected shape. There are no retries and no caching; timeouts
//! and redirects are left at the HTTP stack's defaults.

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::endpoint::EndpointDescriptor;

/// Errors that can occur while fetching a resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The descriptor does not form a valid URL. No request was sent.
    #[error("Invalid URL Format")]
    InvalidUrl,

    /// The server answered with anything but `200 OK`, or with no body.
    #[error("Data not found")]
    InvalidResponse,

    /// DNS, connection, TLS or read failure from the HTTP layer.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The body did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

/// Build the request URL for `endpoint` as `scheme://host/path`.
pub fn build_url(endpoint: &EndpointDescriptor) -> Result<Url, FetchError> {
    let host = endpoint.host.as_str();
    if host.is_empty()
        || host.contains(['/', '?', '#', '@'])
        || host.chars().any(char::is_whitespace)
    {
        return Err(FetchError::InvalidUrl);
    }

    let path = endpoint.path.as_str();
    if !path.is_empty() && !path.starts_with('/') {
        return Err(FetchError::InvalidUrl);
    }

    Url::parse(&format!("{}://{host}{path}", endpoint.scheme)).map_err(|_| FetchError::InvalidUrl)
}

/// Thin wrapper over [`reqwest::Client`] that applies the response rules
/// described in the module docs.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    http: reqwest::Client,
}

impl FetchClient {
    /// Create a client with the HTTP stack's default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch `endpoint` and decode its body into `T`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &EndpointDescriptor,
    ) -> Result<T, FetchError> {
        let url = build_url(endpoint)?;
        debug!(method = %endpoint.method, %url, "sending request");

        let resp = self
            .http
            .request(endpoint.method.to_reqwest(), url)
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            debug!(%status, "rejecting non-200 response");
            return Err(FetchError::InvalidResponse);
        }

        let body = resp.bytes().await?;
        if body.is_empty() {
            debug!("rejecting empty response body");
            return Err(FetchError::InvalidResponse);
        }
        debug!(bytes = body.len(), "decoding response body");

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{HttpMethod, Resource, Scheme};

    fn descriptor(host: &str, path: &str) -> EndpointDescriptor {
        EndpointDescriptor {
            scheme: Scheme::Https,
            host: host.to_string(),
            path: path.to_string(),
            method: HttpMethod::Get,
        }
    }

    #[test]
    fn builds_url_for_users() {
        let url = build_url(&Resource::Users.descriptor()).unwrap();
        assert_eq!(url.as_str(), "https://jsonplaceholder.typicode.com/users");
    }

    #[test]
    fn builds_url_with_port() {
        let d = Resource::Albums
            .descriptor()
            .with_location(Scheme::Http, "127.0.0.1:4010");
        let url = build_url(&d).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:4010/albums");
    }

    #[test]
    fn empty_path_yields_root() {
        let url = build_url(&descriptor("example.com", "")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn rejects_empty_host() {
        assert!(matches!(
            build_url(&descriptor("", "/users")),
            Err(FetchError::InvalidUrl)
        ));
    }

    #[test]
    fn rejects_malformed_hosts() {
        for host in ["exa mple.com", "example.com/extra", "user@example.com", "host?q", "[::1"] {
            assert!(
                matches!(build_url(&descriptor(host, "/users")), Err(FetchError::InvalidUrl)),
                "host {host:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_relative_path() {
        assert!(matches!(
            build_url(&descriptor("example.com", "users")),
            Err(FetchError::InvalidUrl)
        ));
    }

    #[test]
    fn error_descriptions() {
        assert_eq!(FetchError::InvalidUrl.to_string(), "Invalid URL Format");
        assert_eq!(FetchError::InvalidResponse.to_string(), "Data not found");
    }

    #[test]
    fn decode_error_passes_through_unmodified() {
        let source = serde_json::from_str::<Vec<i64>>("{").unwrap_err();
        let expected = source.to_string();
        let err = FetchError::from(source);
        assert_eq!(err.to_string(), expected);
    }

    #[tokio::test]
    async fn invalid_url_fails_before_any_request() {
        let client = FetchClient::new();
        let result = client.fetch::<Vec<i64>>(&descriptor("", "/users")).await;
        assert!(matches!(result, Err(FetchError::InvalidUrl)));
    }
}
