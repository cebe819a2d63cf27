//! Registry REST client (impure shell).
//!
//! This module provides:
//! - Request types ([`Endpoint`], [`HttpMethod`], [`ApiRequest`])
//! - The [`Transport`] seam that performs one request/response exchange
//! - [`HttpTransport`], the reqwest-backed implementation
//! - `ScriptedTransport`, an in-memory implementation for tests
//! - [`Dispatcher`], which runs requests off the UI thread
//! - Reply classification in [`reply`]

use crate::model::ApiError;
use std::collections::BTreeMap;
use std::fmt;

pub mod dispatcher;
pub mod http;
pub mod reply;
#[cfg(test)]
pub mod scripted;

pub use dispatcher::{Completion, DispatchMode, Dispatcher};
pub use http::HttpTransport;
#[cfg(test)]
pub use scripted::ScriptedTransport;

/// Request parameters, sent form-encoded (POST) or as a query string (GET).
///
/// Ordered so that requests are reproducible in logs and tests.
pub type Params = BTreeMap<String, String>;

/// Registry endpoints consumed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Full-text search.
    Search,
    /// List approved modules.
    List,
    /// List modules awaiting moderation.
    Unapproved,
    /// Count modules matching optional filters.
    Count,
    /// Submit a module for moderation.
    Register,
    /// Start a moderator session.
    Login,
    /// End a moderator session.
    Logout,
    /// Approve a module.
    Approve,
    /// Remove a module.
    Remove,
}

impl Endpoint {
    /// Path relative to the server root.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Search => "/search",
            Endpoint::List => "/list",
            Endpoint::Unapproved => "/unapproved",
            Endpoint::Count => "/count",
            Endpoint::Register => "/register",
            Endpoint::Login => "/login",
            Endpoint::Logout => "/logout",
            Endpoint::Approve => "/approve",
            Endpoint::Remove => "/remove",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// HTTP method used for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Parameters in the query string.
    Get,
    /// Parameters in a form-encoded body.
    Post,
}

/// One request to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Target endpoint.
    pub endpoint: Endpoint,
    /// HTTP method.
    pub method: HttpMethod,
    /// Request parameters.
    pub params: Params,
}

impl ApiRequest {
    /// Build a GET request.
    pub fn get(endpoint: Endpoint, params: Params) -> Self {
        Self {
            endpoint,
            method: HttpMethod::Get,
            params,
        }
    }

    /// Build a POST request.
    pub fn post(endpoint: Endpoint, params: Params) -> Self {
        Self {
            endpoint,
            method: HttpMethod::Post,
            params,
        }
    }

    /// Look up a parameter value.
    #[cfg(test)]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Performs a single request/response exchange with the registry.
///
/// Implementations block until the reply arrives; the [`Dispatcher`] keeps
/// that off the UI thread. A reply is any JSON document the server returned;
/// interpreting `status` is left to [`reply`].
pub trait Transport: Send + Sync {
    /// Send the request and return the decoded JSON reply.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no usable reply was received and
    /// [`ApiError::Malformed`] when the body is not JSON.
    fn send(&self, request: &ApiRequest) -> Result<serde_json::Value, ApiError>;
}

/// Build a [`Params`] map from string pairs.
pub fn params<const N: usize>(pairs: [(&str, String); N]) -> Params {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths_match_registry_routes() {
        assert_eq!(Endpoint::Search.path(), "/search");
        assert_eq!(Endpoint::Unapproved.path(), "/unapproved");
        assert_eq!(Endpoint::Approve.to_string(), "/approve");
    }

    #[test]
    fn params_helper_builds_ordered_map() {
        let p = params([("skip", "0".to_string()), ("limit", "15".to_string())]);
        let keys: Vec<&str> = p.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["limit", "skip"]);
    }

    #[test]
    fn request_param_lookup() {
        let request = ApiRequest::post(Endpoint::Login, params([("password", "pw".to_string())]));
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.param("password"), Some("pw"));
        assert_eq!(request.param("missing"), None);
    }
}
