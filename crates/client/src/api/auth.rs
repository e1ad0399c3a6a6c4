//! `/auth/*`. The backend does not enforce authentication.

use serde::{Deserialize, Serialize};

use crate::client::RemoteClient;
use crate::error::ClientError;

pub const LOGIN: &str = "/auth/login";
pub const LOGOUT: &str = "/auth/logout";
pub const CURRENT_USER: &str = "/auth/user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl AuthUser {
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            name: None,
            role: None,
        }
    }
}

pub async fn login(client: &RemoteClient, credentials: &Credentials) -> Result<AuthUser, ClientError> {
    client.post(LOGIN, credentials).await
}

pub async fn logout(client: &RemoteClient) -> Result<(), ClientError> {
    client
        .post::<_, serde::de::IgnoredAny>(LOGOUT, &serde_json::json!({}))
        .await
        .map(|_| ())
}

/// `None` when nobody is signed in (the server answers `null`).
pub async fn current_user(client: &RemoteClient) -> Result<Option<AuthUser>, ClientError> {
    client.get(CURRENT_USER, &[]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryTransport, Reply};
    use crate::transport::Method;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn login_posts_credentials() {
        let transport = Arc::new(InMemoryTransport::new());
        let client = RemoteClient::new(transport.clone());
        transport.on(Method::Post, LOGIN, Reply::ok(json!({ "username": "admin", "role": "manager" })));

        let user = login(
            &client,
            &Credentials {
                username: "admin".into(),
                password: "password".into(),
            },
        )
        .await
        .unwrap();

        assert_eq!(user.role.as_deref(), Some("manager"));
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({ "username": "admin", "password": "password" }))
        );
    }

    #[tokio::test]
    async fn logout_ignores_body_and_current_user_accepts_null() {
        let transport = Arc::new(InMemoryTransport::new());
        let client = RemoteClient::new(transport.clone());
        transport
            .on(Method::Post, LOGOUT, Reply::ok(json!({ "ok": true })))
            .on(Method::Get, CURRENT_USER, Reply::ok(json!(null)));

        logout(&client).await.unwrap();
        assert_eq!(current_user(&client).await.unwrap(), None);
    }
}
