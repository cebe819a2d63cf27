//! Identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Server-assigned identifier of a registered module (the `_id` field).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct ModuleId(String);

impl ModuleId {
    /// Smart constructor: validates non-empty module id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidModuleId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidModuleId);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw id as sent to `/approve`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModuleId {
    type Error = InvalidModuleId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque session token returned by `/login`.
///
/// Debug output is redacted so tokens never reach the log file.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Smart constructor: validates non-empty token
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSessionToken> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidSessionToken);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw token for the `sessionID` request parameter.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Error returned when constructing a [`ModuleId`] from an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("module id must not be empty")]
pub struct InvalidModuleId;

/// Error returned when constructing a [`SessionToken`] from an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("session token must not be empty")]
pub struct InvalidSessionToken;
