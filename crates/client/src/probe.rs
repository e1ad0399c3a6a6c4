//! Availability Prober.

use serde::{Deserialize, Serialize};

use crate::client::RemoteClient;

pub const HEALTH_PATH: &str = "/health";

/// What the last probe said about the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityState {
    /// Not probed yet; fetchers still try the network.
    #[default]
    Unknown,
    Online,
    /// A probe failed; fetchers skip the network and fall back.
    Offline,
}

impl ConnectivityState {
    pub fn from_probe(available: bool) -> Self {
        if available {
            ConnectivityState::Online
        } else {
            ConnectivityState::Offline
        }
    }

    pub fn is_offline(&self) -> bool {
        *self == ConnectivityState::Offline
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectivityState::Unknown => "unknown",
            ConnectivityState::Online => "online",
            ConnectivityState::Offline => "offline",
        }
    }
}

#[derive(Clone)]
pub struct AvailabilityProber {
    client: RemoteClient,
    path: String,
}

impl AvailabilityProber {
    pub fn new(client: RemoteClient) -> Self {
        Self {
            client,
            path: HEALTH_PATH.to_string(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Check connectivity by hitting the liveness path once.
    ///
    /// Any failure, including a timeout, yields `false`.
    pub async fn probe(&self) -> bool {
        let available = self.client.ping(&self.path).await.is_ok();
        tracing::debug!(path = %self.path, available, "availability probe");
        available
    }

    pub async fn check(&self) -> ConnectivityState {
        ConnectivityState::from_probe(self.probe().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryTransport, Reply};
    use crate::transport::Method;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn probe_reflects_health_endpoint() {
        let transport = Arc::new(InMemoryTransport::new());
        let prober = AvailabilityProber::new(RemoteClient::new(transport.clone()));

        assert!(!prober.probe().await);

        transport.on(Method::Get, HEALTH_PATH, Reply::ok(json!({ "status": "UP" })));
        assert_eq!(prober.check().await, ConnectivityState::Online);

        transport.on(Method::Get, HEALTH_PATH, Reply::Timeout);
        assert_eq!(prober.check().await, ConnectivityState::Offline);
    }

    #[test]
    fn only_offline_short_circuits() {
        assert!(!ConnectivityState::Unknown.is_offline());
        assert!(ConnectivityState::from_probe(false).is_offline());
    }
}
