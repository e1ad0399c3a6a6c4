//! Remote Data Client: typed calls over a [`Transport`] with uniform failures.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{ClientConfig, ConfigError};
use crate::error::ClientError;
use crate::http::HttpTransport;
use crate::transport::{Method, RawResponse, Request, Transport, TransportFailure};

/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct RemoteClient {
    transport: Arc<dyn Transport>,
}

impl RemoteClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let request = query
            .iter()
            .fold(Request::get(path), |req, (k, v)| req.query(*k, *v));
        self.call(request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.with_body(Request::new(Method::Post, path), body)?;
        self.call(request).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.with_body(Request::new(Method::Put, path), body)?;
        self.call(request).await
    }

    /// An empty response body decodes as JSON `null`, so `T = ()` accepts `204`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.call(Request::new(Method::Delete, path)).await
    }

    /// Like [`get`](Self::get) but never fails: the failure has already been
    /// logged and the caller only needs to know whether data arrived.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Option<T> {
        self.get(path, query).await.ok()
    }

    /// Succeeds on any 2xx, whatever the body.
    pub async fn ping(&self, path: &str) -> Result<(), ClientError> {
        self.exchange(Request::get(path)).await.map(|_| ())
    }

    pub async fn call<T: DeserializeOwned>(&self, request: Request) -> Result<T, ClientError> {
        let endpoint = request.endpoint();
        let response = self.exchange(request).await?;

        decode(&response.body).map_err(|reason| {
            let err = ClientError::MalformedResponse { endpoint, reason };
            tracing::warn!(endpoint = err.endpoint(), error = %err, "malformed response");
            err
        })
    }

    fn with_body<B: Serialize + ?Sized>(&self, request: Request, body: &B) -> Result<Request, ClientError> {
        let value = serde_json::to_value(body).map_err(|e| ClientError::Encode {
            endpoint: request.endpoint(),
            reason: e.to_string(),
        })?;
        Ok(request.body(value))
    }

    async fn exchange(&self, request: Request) -> Result<RawResponse, ClientError> {
        let endpoint = request.endpoint();
        tracing::debug!(endpoint = %endpoint, "sending request");

        let result = match self.transport.send(request).await {
            Ok(response) if response.is_success() => return Ok(response),
            Ok(response) => Err(ClientError::Server {
                message: server_message(&response.body),
                status: response.status,
                endpoint,
            }),
            Err(TransportFailure::TimedOut(after)) => Err(ClientError::Timeout {
                endpoint,
                after_ms: u64::try_from(after.as_millis()).unwrap_or(u64::MAX),
            }),
            Err(TransportFailure::Unreachable(reason)) => {
                Err(ClientError::NetworkUnreachable { endpoint, reason })
            }
        };

        if let Err(err) = &result {
            match err {
                ClientError::Server { status, .. } => {
                    tracing::warn!(endpoint = err.endpoint(), status, error = %err, "remote call failed")
                }
                _ => tracing::warn!(endpoint = err.endpoint(), error = %err, "remote call failed"),
            }
        }
        result
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, String> {
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        body
    };
    serde_json::from_slice(body).map_err(|e| e.to_string())
}

fn server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryTransport, Reply};
    use serde_json::json;
    use std::time::Duration;

    fn client(transport: &Arc<InMemoryTransport>) -> RemoteClient {
        RemoteClient::new(transport.clone())
    }

    #[tokio::test]
    async fn decodes_typed_body() {
        let transport = Arc::new(InMemoryTransport::new());
        transport.on(Method::Get, "/inventory/available", Reply::ok(json!(12)));

        let count: u64 = client(&transport).get("/inventory/available", &[]).await.unwrap();
        assert_eq!(count, 12);
    }

    #[tokio::test]
    async fn classifies_each_failure() {
        let transport = Arc::new(InMemoryTransport::new());
        transport
            .on(Method::Get, "/a", Reply::Json(400, json!({ "message": "bad timeframe" })))
            .on(Method::Get, "/b", Reply::status(503))
            .on(Method::Get, "/c", Reply::Raw(200, b"<html>".to_vec()))
            .on(Method::Get, "/d", Reply::Timeout);
        let client = client(&transport);

        let a = client.get::<Value>("/a", &[]).await.unwrap_err();
        let b = client.get::<Value>("/b", &[]).await.unwrap_err();
        let c = client.get::<Value>("/c", &[]).await.unwrap_err();
        let d = client.get::<Value>("/d", &[]).await.unwrap_err();
        let e = client.get::<Value>("/e", &[]).await.unwrap_err();

        assert_eq!(a.to_string(), "GET /a: bad timeframe");
        assert_eq!(b.to_string(), "GET /b: Server responded with status: 503");
        assert!(matches!(c, ClientError::MalformedResponse { .. }));
        assert!(matches!(d, ClientError::Timeout { .. }));
        assert!(matches!(e, ClientError::NetworkUnreachable { .. }));
    }

    struct NeverAnswers;

    #[async_trait::async_trait]
    impl Transport for NeverAnswers {
        async fn send(&self, _request: Request) -> Result<RawResponse, TransportFailure> {
            Err(TransportFailure::TimedOut(Duration::MAX))
        }
    }

    #[tokio::test]
    async fn oversized_timeout_saturates() {
        let client = RemoteClient::new(Arc::new(NeverAnswers));

        let err = client.get::<Value>("/slow", &[]).await.unwrap_err();

        assert_eq!(
            err,
            ClientError::Timeout {
                endpoint: "GET /slow".into(),
                after_ms: u64::MAX,
            }
        );
    }

    #[tokio::test]
    async fn delete_accepts_empty_body_and_fetch_swallows_failures() {
        let transport = Arc::new(InMemoryTransport::new());
        transport.on(Method::Delete, "/inventory/4", Reply::status(200));
        let client = client(&transport);

        let deleted: Result<(), _> = client.delete("/inventory/4").await;
        assert!(deleted.is_ok());
        assert_eq!(client.fetch::<Value>("/missing", &[]).await, None);
    }

    #[tokio::test]
    async fn ping_ignores_body_shape() {
        let transport = Arc::new(InMemoryTransport::new());
        transport.on(
            Method::Get,
            "/health",
            Reply::Raw(200, b"UP".to_vec()).after(Duration::from_millis(1)),
        );

        assert!(client(&transport).ping("/health").await.is_ok());
    }

    #[tokio::test]
    async fn post_sends_body_and_query_is_recorded() {
        let transport = Arc::new(InMemoryTransport::new());
        transport
            .on(Method::Post, "/supplier/save", Reply::ok(json!({ "ok": true })))
            .on(Method::Get, "/analytics/usage", Reply::ok(json!([])));
        let client = client(&transport);

        let _: Value = client.post("/supplier/save", &json!({ "company": "Acme" })).await.unwrap();
        let _: Vec<Value> = client.get("/analytics/usage", &[("timeframe", "week")]).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].body, Some(json!({ "company": "Acme" })));
        assert_eq!(requests[1].query, vec![("timeframe".to_string(), "week".to_string())]);
    }
}
