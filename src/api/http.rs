//! HTTP transport backed by a blocking reqwest client.

use super::{ApiRequest, HttpMethod, Transport};
use crate::model::ApiError;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, warn};

/// Sends registry requests over HTTP.
///
/// POST parameters are form-encoded, GET parameters go in the query string.
/// Every request is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    /// Create a transport for the registry rooted at `server_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the URL cannot be parsed or the
    /// client cannot be built.
    pub fn new(server_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base = parse_base_url(server_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base })
    }

    /// Absolute URL for a request's endpoint.
    pub fn endpoint_url(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        self.base
            .join(request.endpoint.path().trim_start_matches('/'))
            .map_err(|e| ApiError::Network(format!("invalid endpoint URL: {e}")))
    }
}

/// Parse the server URL, forcing a trailing slash so joins keep any path prefix.
fn parse_base_url(server_url: &str) -> Result<Url, ApiError> {
    let mut raw = server_url.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    let url = Url::parse(&raw)
        .map_err(|e| ApiError::Network(format!("invalid server URL {server_url:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::Network(format!(
            "unsupported URL scheme {other:?} in {server_url:?}"
        ))),
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint_url(request)?;
        debug!(endpoint = %request.endpoint, method = ?request.method, "Sending request");

        let builder = match request.method {
            HttpMethod::Get => self.client.get(url).query(&request.params),
            HttpMethod::Post => self.client.post(url).form(&request.params),
        };

        let response = builder
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| {
                warn!(endpoint = %request.endpoint, error = %e, "Request failed");
                ApiError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ApiError::Network(format!("failed to read reply: {e}")))?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => {
                warn!(endpoint = %request.endpoint, %status, "Non-JSON error reply");
                Err(ApiError::Network(format!("server responded with {status}")))
            }
            Err(e) => {
                warn!(endpoint = %request.endpoint, error = %e, "Reply is not JSON");
                Err(ApiError::Malformed {
                    endpoint: request.endpoint.path().to_string(),
                })
            }
        }
    }
}
