//! Sign-in state against the stubbed auth endpoints.

use larder_client::api::auth::{self, AuthUser, Credentials};

use crate::context::ViewContext;
use crate::forms::FormError;
use crate::scope::MountScope;
use crate::state::Notice;

/// Accepted locally when the backend has no auth endpoint.
pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "password";

pub struct Session {
    ctx: ViewContext,
    scope: MountScope,
    user: Option<AuthUser>,
    notice: Option<Notice>,
}

impl Session {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            scope: MountScope::new(),
            user: None,
            notice: None,
        }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Ask the server who is signed in. A failure leaves the session as is.
    pub async fn refresh(&mut self) {
        if let Some(Ok(user)) = self.scope.guard(auth::current_user(self.ctx.client())).await {
            self.user = user;
        }
    }

    /// Sign in through the server. If the server rejects or cannot serve the
    /// request, only the demo credentials are accepted.
    pub async fn login(&mut self, credentials: Credentials) -> Result<(), FormError> {
        if let Err(err) = larder_core::DomainError::require(&[
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ]) {
            self.notice = Some(Notice::invalid(&err));
            return Err(err.into());
        }

        let result = self
            .scope
            .guard(auth::login(self.ctx.client(), &credentials))
            .await
            .ok_or(FormError::Unmounted)?;

        match result {
            Ok(user) => {
                tracing::info!(username = %user.username, "signed in");
                self.user = Some(user);
            }
            Err(err) if is_demo(&credentials) => {
                tracing::warn!(error = %err, "auth endpoint unavailable, accepting demo credentials");
                self.user = Some(AuthUser::named(DEMO_USERNAME));
            }
            Err(err) => {
                self.notice = Some(Notice::error("Login failed", "Invalid username or password"));
                return Err(err.into());
            }
        }

        self.notice = Some(Notice::success("Login successful", "Welcome to the inventory dashboard"));
        Ok(())
    }

    pub async fn logout(&mut self) {
        if let Some(Err(err)) = self.scope.guard(auth::logout(self.ctx.client())).await {
            tracing::warn!(error = %err, "logout call failed");
        }
        self.user = None;
    }
}

fn is_demo(credentials: &Credentials) -> bool {
    credentials.username == DEMO_USERNAME && credentials.password == DEMO_PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NoticeLevel;
    use larder_client::{InMemoryTransport, Method, RemoteClient, Reply};
    use serde_json::json;
    use std::sync::Arc;

    fn creds(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    fn session(transport: &Arc<InMemoryTransport>) -> Session {
        Session::new(ViewContext::new(RemoteClient::new(transport.clone())))
    }

    #[tokio::test]
    async fn server_login_sets_user() {
        let transport = Arc::new(InMemoryTransport::new());
        transport.on(Method::Post, auth::LOGIN, Reply::ok(json!({ "username": "chef" })));
        let mut session = session(&transport);

        session.login(creds("chef", "secret")).await.unwrap();

        assert_eq!(session.user().unwrap().username, "chef");
        assert_eq!(session.notice().unwrap().level, NoticeLevel::Success);
    }

    #[tokio::test]
    async fn unknown_credentials_fail_without_backend() {
        let transport = Arc::new(InMemoryTransport::new());
        let mut session = session(&transport);

        assert!(matches!(session.login(creds("chef", "nope")).await, Err(FormError::Remote(_))));
        assert_eq!(session.notice().unwrap().title, "Login failed");
        assert!(session.user().is_none());

        session.login(creds(DEMO_USERNAME, DEMO_PASSWORD)).await.unwrap();
        assert_eq!(session.user().unwrap().username, DEMO_USERNAME);
    }

    #[tokio::test]
    async fn blank_credentials_make_no_call() {
        let transport = Arc::new(InMemoryTransport::new());
        let mut session = session(&transport);

        assert!(matches!(session.login(creds("", "")).await, Err(FormError::Invalid(_))));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn logout_clears_user_even_if_call_fails() {
        let transport = Arc::new(InMemoryTransport::new());
        transport.on(Method::Get, auth::CURRENT_USER, Reply::ok(json!({ "username": "chef" })));
        let mut session = session(&transport);

        session.refresh().await;
        assert!(session.user().is_some());

        session.logout().await;
        assert!(session.user().is_none());
        assert_eq!(transport.calls(), vec!["GET /auth/user", "POST /auth/logout"]);
    }
}
