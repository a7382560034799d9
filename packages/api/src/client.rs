//! # HTTP client
//!
//! [`ApiClient`] is the single gateway to the backend. It owns a
//! [`reqwest::Client`], the base URL, and a handle to the [`SessionStore`].
//!
//! ## Request path
//!
//! 1. [`ApiClient::call`] builds a [`Call`] for a method and path, attaching
//!    `Authorization: Bearer <token>` when a session exists.
//! 2. Endpoint methods add a JSON body or query string and hand the call to
//!    [`ApiClient::send`] (expects `data`) or [`ApiClient::send_ack`] (only
//!    the `message`).
//!
//! ## Response handling
//!
//! | Status | Outcome |
//! |--------|---------|
//! | 2xx | body decoded as [`Envelope`] |
//! | 401 | session torn down, redirect hook fired, [`ApiError::Unauthorized`] |
//! | other 4xx | [`ApiError::Rejected`] with the server message or a fallback |
//! | 5xx | [`ApiError::Server`] with the server message or a fallback |
//!
//! Calls marked with [`Call::credentials`] (login, registration) are exempt
//! from the 401 teardown: a rejection there means wrong credentials and
//! becomes [`ApiError::InvalidCredentials`].
//!
//! The redirect hook runs when a 401 actually tears a session down, or when an
//! anonymous request hits a protected endpoint. Concurrent 401s for the same
//! session fire it once, because only one of them wins
//! [`SessionStore::invalidate`].

use std::fmt;
use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use store::{KeyValueStore, SessionStore, StorefrontConfig};

use crate::envelope::{Envelope, ErrorBody};
use crate::error::ApiError;

/// Callback that sends the user to the login view.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Backend client shared by every view.
#[derive(Clone)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore<S>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl<S> fmt::Debug for ApiClient<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("on_unauthorized", &self.on_unauthorized.is_some())
            .finish()
    }
}

/// A request being prepared.
pub struct Call {
    builder: RequestBuilder,
    method: Method,
    path: String,
    authenticated: bool,
    credentials: bool,
}

impl Call {
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.builder = self.builder.json(body);
        self
    }

    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Self {
        self.builder = self.builder.query(query);
        self
    }

    /// Mark this as a credential submission (login, registration).
    pub fn credentials(mut self) -> Self {
        self.credentials = true;
        self
    }
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, session: SessionStore<S>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
            on_unauthorized: None,
        }
    }

    pub fn from_config(config: &StorefrontConfig, session: SessionStore<S>) -> Self {
        Self::new(config.api.base_url.clone(), session)
    }

    /// Install the callback that navigates to the login view after a 401.
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request, attaching the bearer token when signed in.
    pub fn call(&self, method: Method, path: &str) -> Call {
        let mut builder = self
            .http
            .request(method.clone(), self.url(path))
            .header(CONTENT_TYPE, "application/json");
        let token = self.session.token();
        if let Some(token) = &token {
            builder = builder.bearer_auth(token);
        }
        Call {
            builder,
            method,
            path: path.to_string(),
            authenticated: token.is_some(),
            credentials: false,
        }
    }

    /// Send and return the envelope's `data`.
    pub async fn send<T: DeserializeOwned>(&self, call: Call) -> Result<T, ApiError> {
        Ok(self.send_envelope::<T>(call).await?.data)
    }

    /// Send and return the envelope's `message`, ignoring any `data`.
    pub async fn send_ack(&self, call: Call) -> Result<String, ApiError> {
        let envelope = self.send_envelope::<Option<IgnoredAny>>(call).await?;
        Ok(envelope.message.unwrap_or_default())
    }

    /// Send and decode the whole envelope.
    pub async fn send_envelope<T: DeserializeOwned>(
        &self,
        call: Call,
    ) -> Result<Envelope<T>, ApiError> {
        let Call {
            builder,
            method,
            path,
            authenticated,
            credentials,
        } = call;
        tracing::debug!(%method, path = %path, authenticated, "API request");

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%method, path = %path, "API request failed: {}", e);
            ApiError::Transport(e)
        })?;
        let status = response.status();

        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            return Err(self.reject(status, body.message, authenticated, credentials, &path));
        }

        let text = response.text().await?;
        serde_json::from_str::<Envelope<T>>(&text).map_err(|e| {
            tracing::warn!(%method, path = %path, "Undecodable response: {}", e);
            ApiError::Decode(e.to_string())
        })
    }

    fn reject(
        &self,
        status: StatusCode,
        message: Option<String>,
        authenticated: bool,
        credentials: bool,
        path: &str,
    ) -> ApiError {
        if credentials && status.is_client_error() {
            let message = message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| INVALID_CREDENTIALS.to_string());
            return ApiError::InvalidCredentials(message);
        }

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized(authenticated, path);
            return ApiError::Unauthorized;
        }

        let err = ApiError::from_status(status, message);
        tracing::debug!(path, status = status.as_u16(), "API call rejected: {}", err);
        err
    }

    fn handle_unauthorized(&self, authenticated: bool, path: &str) {
        let torn_down = self.session.invalidate();
        if torn_down {
            tracing::warn!(path, "Session rejected by the server, signing out");
        }
        if torn_down || !authenticated {
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
        }
    }
}
