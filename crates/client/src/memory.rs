//! Scripted in-process transport.
//!
//! Routes are keyed by method and path (query strings are recorded but not
//! matched). Each route has an optional queue of one-shot replies consumed
//! first and a standing reply used afterwards. Unscripted routes behave like
//! an unreachable host. Every request is appended to a log so callers can
//! assert on the exact sequence of calls.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::DEFAULT_TIMEOUT;
use crate::transport::{Method, RawResponse, Request, Transport, TransportFailure};

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Json(u16, Value),
    Raw(u16, Vec<u8>),
    Unreachable,
    Timeout,
    Delayed(Duration, Box<Reply>),
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Reply::Json(200, body)
    }

    pub fn status(status: u16) -> Self {
        Reply::Raw(status, Vec::new())
    }

    pub fn after(self, delay: Duration) -> Self {
        Reply::Delayed(delay, Box::new(self))
    }
}

#[derive(Default)]
struct Route {
    queued: VecDeque<Reply>,
    standing: Option<Reply>,
}

#[derive(Default)]
pub struct InMemoryTransport {
    routes: Mutex<HashMap<(Method, String), Route>>,
    log: Mutex<Vec<Request>>,
    offline: AtomicBool,
}

fn key(method: Method, path: &str) -> (Method, String) {
    (method, path.trim_start_matches('/').to_string())
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standing reply for every call to `method path`.
    pub fn on(&self, method: Method, path: &str, reply: Reply) -> &Self {
        lock(&self.routes).entry(key(method, path)).or_default().standing = Some(reply);
        self
    }

    /// One-shot reply, consumed before any standing reply.
    pub fn once(&self, method: Method, path: &str, reply: Reply) -> &Self {
        lock(&self.routes)
            .entry(key(method, path))
            .or_default()
            .queued
            .push_back(reply);
        self
    }

    /// While offline every call fails as unreachable, scripted or not.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<Request> {
        lock(&self.log).clone()
    }

    /// The log as `"GET /path"` strings, in call order.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.log).iter().map(Request::endpoint).collect()
    }

    pub fn clear_log(&self) {
        lock(&self.log).clear();
    }

    fn next_reply(&self, request: &Request) -> Option<Reply> {
        let mut routes = lock(&self.routes);
        let route = routes.get_mut(&key(request.method, &request.path))?;
        route.queued.pop_front().or_else(|| route.standing.clone())
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn send(&self, request: Request) -> Result<RawResponse, TransportFailure> {
        lock(&self.log).push(request.clone());

        if self.offline.load(Ordering::SeqCst) {
            return Err(TransportFailure::Unreachable("transport offline".into()));
        }

        let mut reply = self.next_reply(&request).unwrap_or(Reply::Unreachable);
        loop {
            match reply {
                Reply::Delayed(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    reply = *inner;
                }
                Reply::Json(status, body) => {
                    return Ok(RawResponse {
                        status,
                        body: body.to_string().into_bytes(),
                    });
                }
                Reply::Raw(status, body) => return Ok(RawResponse { status, body }),
                Reply::Unreachable => {
                    return Err(TransportFailure::Unreachable(format!(
                        "no route for {}",
                        request.endpoint()
                    )));
                }
                Reply::Timeout => return Err(TransportFailure::TimedOut(DEFAULT_TIMEOUT)),
            }
        }
    }
}
