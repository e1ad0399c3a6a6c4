//! The seam between the Remote Data Client and the wire.
//!
//! A transport moves bytes and reports only whether a response arrived.
//! Status interpretation and body decoding live in [`crate::RemoteClient`] so
//! every transport fails the same way.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound call. `path` is relative to the configured base url.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// `"GET /inventory/getAll"`, used in errors and log lines.
    pub fn endpoint(&self) -> String {
        format!("{} /{}", self.method, self.path.trim_start_matches('/'))
    }
}

/// Whatever came back, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response arrived.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportFailure {
    #[error("unreachable: {0}")]
    Unreachable(String),
    #[error("timed out after {0:?}")]
    TimedOut(Duration),
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<RawResponse, TransportFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalises_leading_slash() {
        assert_eq!(Request::get("/health").endpoint(), "GET /health");
        assert_eq!(
            Request::new(Method::Delete, "inventory/3").endpoint(),
            "DELETE /inventory/3"
        );
    }

    #[test]
    fn success_is_2xx_only() {
        let ok = RawResponse { status: 204, body: Vec::new() };
        let redirect = RawResponse { status: 302, body: Vec::new() };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
    }
}
