//! Classification of registry replies.
//!
//! Every endpoint answers with a JSON object carrying a `status` field.
//! These parsers turn the raw document into the typed outcome each caller
//! needs. Parsing is total: anything unrecognised becomes a malformed
//! outcome rather than an error.

use crate::model::{ApiError, SessionToken};
use serde_json::Value;

/// The `status` field of a reply, with its error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// `status: "ok"`.
    Ok,
    /// `status: "error"` with `messages[]` or a single `message`.
    Error(Vec<String>),
    /// `status: "denied"`.
    Denied,
    /// Missing or unrecognised status.
    Other,
}

/// Read the status of a reply.
pub fn status(reply: &Value) -> Status {
    match reply.get("status").and_then(Value::as_str) {
        Some("ok") => Status::Ok,
        Some("error") => Status::Error(error_messages(reply)),
        Some("denied") => Status::Denied,
        _ => Status::Other,
    }
}

/// Collect error text: the `message` string if present, else `messages[]`.
pub fn error_messages(reply: &Value) -> Vec<String> {
    if let Some(message) = reply.get("message").and_then(Value::as_str) {
        return vec![message.to_string()];
    }
    reply
        .get("messages")
        .and_then(Value::as_array)
        .map(|messages| {
            messages
                .iter()
                .map(|m| match m.as_str() {
                    Some(s) => s.to_string(),
                    None => m.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Extract `count` from a `/count` reply; `None` unless `status: "ok"`.
pub fn count(reply: &Value) -> Option<u64> {
    if status(reply) != Status::Ok {
        return None;
    }
    reply.get("count").and_then(Value::as_u64)
}

/// Outcome of `/login`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginReply {
    /// Password accepted; carries the new session token.
    Granted(SessionToken),
    /// Wrong password.
    Denied,
    /// The registry reported errors.
    Error(Vec<String>),
    /// Unrecognised reply.
    Malformed,
}

impl LoginReply {
    /// Classify a `/login` reply.
    pub fn parse(reply: &Value) -> Self {
        match status(reply) {
            Status::Ok => reply
                .get("sessionID")
                .and_then(Value::as_str)
                .and_then(|raw| SessionToken::new(raw).ok())
                .map(LoginReply::Granted)
                .unwrap_or(LoginReply::Malformed),
            Status::Denied => LoginReply::Denied,
            Status::Error(messages) => LoginReply::Error(messages),
            Status::Other => LoginReply::Malformed,
        }
    }
}

/// Outcome of `/register`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterReply {
    /// Module accepted for moderation.
    Submitted {
        /// Registered module name as echoed in `data.name`.
        name: String,
        /// Whether moderators were notified by mail.
        mail_sent: bool,
    },
    /// Registration rejected with one or more messages.
    Rejected(Vec<String>),
    /// Unrecognised reply.
    Malformed,
}

impl RegisterReply {
    /// Classify a `/register` reply.
    pub fn parse(reply: &Value) -> Self {
        match status(reply) {
            Status::Ok => {
                let name = reply
                    .pointer("/data/name")
                    .and_then(Value::as_str)
                    .unwrap_or("The module")
                    .to_string();
                let mail_sent = reply
                    .get("mailSent")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                RegisterReply::Submitted { name, mail_sent }
            }
            Status::Error(messages) => RegisterReply::Rejected(messages),
            Status::Denied | Status::Other => RegisterReply::Malformed,
        }
    }
}

/// Outcome of a fire-and-forget action (`/approve`, `/remove`, `/logout`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionReply {
    /// `status: "ok"`.
    Done,
    /// Anything else, with messages for the user.
    Failed(Vec<String>),
}

impl ActionReply {
    /// Classify an action reply.
    pub fn parse(reply: &Value) -> Self {
        match status(reply) {
            Status::Ok => ActionReply::Done,
            Status::Error(messages) if !messages.is_empty() => ActionReply::Failed(messages),
            Status::Denied => ActionReply::Failed(vec![ApiError::Denied.to_string()]),
            Status::Error(_) | Status::Other => {
                ActionReply::Failed(vec!["unexpected reply".to_string()])
            }
        }
    }

    /// Classify a transport result, folding transport errors into `Failed`.
    pub fn from_result(result: &Result<Value, ApiError>) -> Self {
        match result {
            Ok(reply) => Self::parse(reply),
            Err(err) => ActionReply::Failed(err.messages()),
        }
    }
}
