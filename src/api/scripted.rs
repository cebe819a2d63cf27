//! In-memory transport with scripted replies.
//!
//! Used by tests and the acceptance harness to drive the client without a
//! server. Replies are queued per endpoint and consumed in order; every
//! request is recorded.

use super::{ApiRequest, Endpoint, Transport};
use crate::model::ApiError;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Transport that answers from per-endpoint reply queues.
///
/// When an endpoint's queue is empty, its fallback reply (if any) is used;
/// otherwise the request fails with [`ApiError::Network`].
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    queued: Mutex<HashMap<Endpoint, VecDeque<Result<Value, ApiError>>>>,
    fallback: Mutex<HashMap<Endpoint, Value>>,
    log: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    /// Create a transport with no scripted replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON reply for the next request to `endpoint`.
    pub fn reply(&self, endpoint: Endpoint, value: Value) -> &Self {
        self.push(endpoint, Ok(value))
    }

    /// Queue a failure for the next request to `endpoint`.
    pub fn fail(&self, endpoint: Endpoint, error: ApiError) -> &Self {
        self.push(endpoint, Err(error))
    }

    /// Reply used whenever `endpoint` has nothing queued.
    pub fn always(&self, endpoint: Endpoint, value: Value) -> &Self {
        if let Ok(mut fallback) = self.fallback.lock() {
            fallback.insert(endpoint, value);
        }
        self
    }

    fn push(&self, endpoint: Endpoint, reply: Result<Value, ApiError>) -> &Self {
        if let Ok(mut queued) = self.queued.lock() {
            queued.entry(endpoint).or_default().push_back(reply);
        }
        self
    }

    /// All requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Requests received for one endpoint, in arrival order.
    pub fn requests_to(&self, endpoint: Endpoint) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.endpoint == endpoint)
            .collect()
    }

    /// Forget recorded requests (queued replies are kept).
    pub fn clear_log(&self) {
        if let Ok(mut log) = self.log.lock() {
            log.clear();
        }
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        if let Ok(mut log) = self.log.lock() {
            log.push(request.clone());
        }

        let queued = self
            .queued
            .lock()
            .ok()
            .and_then(|mut q| q.get_mut(&request.endpoint).and_then(VecDeque::pop_front));
        if let Some(reply) = queued {
            return reply;
        }

        self.fallback
            .lock()
            .ok()
            .and_then(|f| f.get(&request.endpoint).cloned())
            .ok_or_else(|| {
                ApiError::Network(format!("no scripted reply for {}", request.endpoint))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::params;
    use serde_json::json;

    #[test]
    fn queued_replies_are_consumed_in_order() {
        let t = ScriptedTransport::new();
        t.reply(Endpoint::Count, json!({"count": 1}))
            .reply(Endpoint::Count, json!({"count": 2}));

        let req = ApiRequest::get(Endpoint::Count, params([]));
        assert_eq!(t.send(&req).unwrap(), json!({"count": 1}));
        assert_eq!(t.send(&req).unwrap(), json!({"count": 2}));
    }

    #[test]
    fn fallback_is_used_when_queue_is_empty() {
        let t = ScriptedTransport::new();
        t.always(Endpoint::List, json!({"status": "ok", "modules": []}));

        let req = ApiRequest::get(Endpoint::List, params([]));
        assert!(t.send(&req).is_ok());
        assert!(t.send(&req).is_ok());
    }

    #[test]
    fn unscripted_endpoint_is_network_failure() {
        let t = ScriptedTransport::new();
        let req = ApiRequest::post(Endpoint::Login, params([]));
        assert!(matches!(t.send(&req), Err(ApiError::Network(_))));
    }

    #[test]
    fn requests_are_recorded() {
        let t = ScriptedTransport::new();
        t.fail(Endpoint::Logout, ApiError::Denied);

        let req = ApiRequest::post(Endpoint::Logout, params([("sessionID", "s".to_string())]));
        assert_eq!(t.send(&req), Err(ApiError::Denied));
        assert_eq!(t.requests_to(Endpoint::Logout), vec![req]);

        t.clear_log();
        assert!(t.requests().is_empty());
    }
}
