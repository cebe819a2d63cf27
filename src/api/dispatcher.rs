//! Runs registry requests off the UI thread.
//!
//! The UI thread hands a request plus an opaque tag to [`Dispatcher::dispatch`]
//! and later drains [`Completion`]s from a channel. Completions carry the tag
//! back unchanged so the caller can match replies to the action that caused
//! them. The dispatcher never cancels or reorders anything; deciding whether a
//! reply is stale is the caller's job.
//!
//! Every dispatched request produces exactly one completion, including when
//! its worker thread cannot be started.

use super::{ApiRequest, Transport};
use crate::model::ApiError;
use serde_json::Value;
use std::io;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread;
use tracing::{debug, warn};

/// A finished request.
#[derive(Debug)]
pub struct Completion<T> {
    /// Tag supplied at dispatch time.
    pub tag: T,
    /// The request that was sent.
    pub request: ApiRequest,
    /// Decoded reply or transport failure.
    pub result: Result<Value, ApiError>,
}

/// How requests are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// One worker thread per request. Used by the interactive TUI.
    Background,
    /// Execute on the calling thread; the completion is queued immediately.
    /// Deterministic, used by tests.
    Inline,
}

type Work = Box<dyn FnOnce() + Send + 'static>;

/// Starts a named worker running `work`.
type Spawner = fn(String, Work) -> io::Result<()>;

fn spawn_thread(name: String, work: Work) -> io::Result<()> {
    thread::Builder::new().name(name).spawn(work).map(drop)
}

/// Tag and request waiting to be picked up by a worker.
type Job<T> = Arc<Mutex<Option<(T, ApiRequest)>>>;

fn take_job<T>(job: &Job<T>) -> Option<(T, ApiRequest)> {
    job.lock().ok().and_then(|mut slot| slot.take())
}

/// Executes requests through a [`Transport`] and collects completions.
pub struct Dispatcher<T> {
    transport: Arc<dyn Transport>,
    mode: DispatchMode,
    spawner: Spawner,
    tx: Sender<Completion<T>>,
    rx: Receiver<Completion<T>>,
    in_flight: usize,
}

impl<T: Send + 'static> Dispatcher<T> {
    /// Create a dispatcher over `transport`.
    pub fn new(transport: Arc<dyn Transport>, mode: DispatchMode) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            transport,
            mode,
            spawner: spawn_thread,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Start executing `request`; its completion will carry `tag`.
    pub fn dispatch(&mut self, tag: T, request: ApiRequest) {
        self.in_flight += 1;
        match self.mode {
            DispatchMode::Inline => {
                let result = self.transport.send(&request);
                let _ = self.tx.send(Completion {
                    tag,
                    request,
                    result,
                });
            }
            DispatchMode::Background => self.spawn_worker(tag, request),
        }
        debug!(in_flight = self.in_flight, "Request dispatched");
    }

    fn spawn_worker(&mut self, tag: T, request: ApiRequest) {
        let endpoint = request.endpoint;
        let name = format!("modreg-request{}", endpoint.path().replace('/', "-"));
        let job: Job<T> = Arc::new(Mutex::new(Some((tag, request))));

        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        let worker_job = Arc::clone(&job);
        let work: Work = Box::new(move || {
            let Some((tag, request)) = take_job(&worker_job) else {
                return;
            };
            let result = transport.send(&request);
            // Receiver gone means the UI is shutting down
            let _ = tx.send(Completion {
                tag,
                request,
                result,
            });
        });

        if let Err(e) = (self.spawner)(name, work) {
            warn!(%endpoint, error = %e, "Failed to spawn request worker");
            if let Some((tag, request)) = take_job(&job) {
                let _ = self.tx.send(Completion {
                    tag,
                    request,
                    result: Err(ApiError::Network(format!("failed to start request: {e}"))),
                });
            }
        }
    }

    /// Take the next finished request, if any. Never blocks.
    pub fn try_next(&mut self) -> Option<Completion<T>> {
        match self.rx.try_recv() {
            Ok(completion) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(completion)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}
