//! Sign-in, registration and the signed-in user's own profile.

use reqwest::Method;
use store::{KeyValueStore, ProfileUpdate, Session};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserSummary};

impl<S: KeyValueStore> ApiClient<S> {
    /// Exchange credentials for a session and persist it.
    ///
    /// Rejected credentials surface as [`ApiError::InvalidCredentials`]; they
    /// never trigger the global sign-out.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, ApiError> {
        let call = self
            .call(Method::POST, "/users/login")
            .json(credentials)
            .credentials();
        let response: AuthResponse = self.send(call).await?;
        let session = response.into_session()?;
        self.session().establish(session.clone());
        tracing::info!(user_id = session.user().id, role = %session.role(), "Signed in");
        Ok(session)
    }

    /// Create an account and sign straight into it.
    pub async fn register(&self, details: &RegisterRequest) -> Result<Session, ApiError> {
        let call = self
            .call(Method::POST, "/users/register")
            .json(details)
            .credentials();
        let response: AuthResponse = self.send(call).await?;
        let session = response.into_session()?;
        self.session().establish(session.clone());
        tracing::info!(user_id = session.user().id, "Registered and signed in");
        Ok(session)
    }

    /// Forget the local session. There is no server-side logout.
    pub fn logout(&self) {
        self.session().logout();
        tracing::info!("Signed out");
    }

    /// `GET /users/profile`
    pub async fn profile(&self) -> Result<UserSummary, ApiError> {
        self.send(self.call(Method::GET, "/users/profile")).await
    }

    /// `PUT /users/updateProfile`, then mirror the change into the local
    /// session. Returns the updated session when one is active.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Option<Session>, ApiError> {
        let call = self.call(Method::PUT, "/users/updateProfile").json(update);
        let _: UserSummary = self.send(call).await?;
        Ok(self.session().update_profile(update))
    }
}
