//! Module records as served by the registry.
//!
//! The registry owns these records; the client only reads them.

use super::identifiers::ModuleId;
use chrono::DateTime;
use serde::{Deserialize, Deserializer};

/// A registered module.
///
/// Timestamps are epoch milliseconds. Optional fields are absent or `null`
/// for modules whose descriptor does not carry them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Server-assigned id, sent back to `/approve`.
    #[serde(rename = "_id")]
    pub id: ModuleId,
    /// Full module name, sent back to `/remove`.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Author handle.
    #[serde(default)]
    pub author: Option<String>,
    /// License names.
    #[serde(default, deserialize_with = "null_as_default")]
    pub licenses: Vec<String>,
    /// Search keywords.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    /// Developer names.
    #[serde(default)]
    pub developers: Option<Vec<String>>,
    /// Project homepage.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Repository prefix for modules hosted outside the catalog repositories.
    #[serde(default)]
    pub download_url: Option<String>,
    /// Where the module artifact lives.
    #[serde(default)]
    pub repo_type: Option<RepoType>,
    /// Registration time (epoch millis).
    pub time_registered: i64,
    /// Approval time (epoch millis), `-1` while unapproved.
    #[serde(default = "never_approved", deserialize_with = "null_as_never_approved")]
    pub time_approved: i64,
    /// Moderation status.
    #[serde(default, deserialize_with = "null_as_default")]
    pub approved: bool,
}

fn never_approved() -> i64 {
    -1
}

/// Explicit `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_never_approved<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_else(never_approved))
}

/// Repository type a module was registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RepoType {
    /// The central Maven repository.
    MavenCentral,
    /// Any other Maven repository, identified by a prefix URL.
    MavenOther,
    /// Bintray hosted binaries.
    Bintray,
    /// A repository type this client does not know.
    #[serde(other)]
    Unknown,
}

impl RepoType {
    /// Human-readable repository name, `None` for unknown types.
    pub fn display_name(self) -> Option<&'static str> {
        match self {
            RepoType::MavenCentral => Some("Central Maven Repository"),
            RepoType::MavenOther => Some("Other Maven Repository"),
            RepoType::Bintray => Some("Bintray"),
            RepoType::Unknown => None,
        }
    }
}

/// Format epoch millis as `DD Mon YYYY HH:MM:SS` (UTC).
///
/// Out-of-range timestamps render as `"unknown"`.
pub fn format_timestamp(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(time) => time.format("%d %b %Y %H:%M:%S").to_string(),
        None => "unknown".to_string(),
    }
}
