//! Error types for modreg.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?`
//! and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Startup failures returned from `main`
//!   - [`ConfigError`] - Config file unreadable or invalid
//!   - [`LoggingError`] - Tracing subscriber could not be installed
//!   - [`ApiError`] - HTTP client construction failures
//!   - `std::io::Error` - Terminal/TUI failures
//! - [`ApiError`] - Per-request failures, always surfaced in the UI
//!
//! # Recovery Strategy
//!
//! Request failures are **non-fatal**: every [`ApiError`] is rendered inline or in a
//! dialog and the UI stays interactive. Nothing is retried automatically.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error encompassing startup failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The registry client could not be built (bad server URL, TLS setup).
    #[error("Registry client error: {0}")]
    Api(#[from] ApiError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure of a single registry request.
///
/// The four variants mirror how the registry can answer (or fail to answer):
///
/// - **Network**: no usable HTTP exchange (connection refused, timeout, non-JSON error page)
/// - **Application**: `status: "error"` with one or more human-readable messages
/// - **Denied**: `status: "denied"`, the session or password was rejected
/// - **Malformed**: JSON that matches none of the documented reply shapes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure.
    #[error("Network failure: {0}")]
    Network(String),

    /// The registry reported one or more errors.
    #[error("{}", .0.join(", "))]
    Application(Vec<String>),

    /// The registry denied access.
    #[error("Access denied.")]
    Denied,

    /// The reply did not match any expected shape.
    #[error("Unexpected reply from {endpoint}")]
    Malformed {
        /// Path of the endpoint that produced the reply.
        endpoint: String,
    },
}

impl ApiError {
    /// Messages to present to the user, one entry per line or bullet.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Application(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}
