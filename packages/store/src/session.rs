//! # Session store
//!
//! [`SessionStore`] owns the signed-in identity: the bearer token and the
//! [`UserProfile`] returned by the login/registration endpoints. It is the only
//! place that reads or writes the persisted session keys.
//!
//! ## Lifecycle
//!
//! | Event | Method | Effect |
//! |-------|--------|--------|
//! | process start | [`restore`](SessionStore::restore) | loads token + profile if both are present and well-formed; malformed data is purged and treated as absent |
//! | login / registration | [`establish`](SessionStore::establish) | persists and activates a [`Session`] |
//! | profile edit | [`update_profile`](SessionStore::update_profile) | merges names/email, keeps the role |
//! | logout | [`logout`](SessionStore::logout) | clears everything, idempotent |
//! | HTTP 401 | [`invalidate`](SessionStore::invalidate) | clears everything and reports whether a session was torn down |
//!
//! Handles are cheap to clone and share the same in-memory session, so the API
//! client and the UI observe the same state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Role, UserProfile};
use crate::storage::{scoped_key, KeyValueStore, TOKEN_KEY, USER_KEY};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session token is missing or empty")]
    EmptyToken,
}

/// An authenticated identity. Always carries a non-empty token.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    token: String,
    user: UserProfile,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserProfile) -> Result<Self, SessionError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self { token, user })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user.role == role
    }
}

/// Editable profile fields. `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Persisted, shareable session state.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    token_key: String,
    user_key: String,
    current: Arc<Mutex<Option<Session>>>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create an empty store. Call [`restore`](Self::restore) to load persisted state.
    pub fn new(storage: S) -> Self {
        Self::with_namespace(storage, None)
    }

    /// Create an empty store whose keys are prefixed with `namespace`.
    pub fn with_namespace(storage: S, namespace: Option<&str>) -> Self {
        Self {
            storage,
            token_key: scoped_key(namespace, TOKEN_KEY),
            user_key: scoped_key(namespace, USER_KEY),
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a store and immediately restore any persisted session.
    pub fn open(storage: S, namespace: Option<&str>) -> Self {
        let store = Self::with_namespace(storage, namespace);
        store.restore();
        store
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Rebuild the session from storage. Never fails: anything malformed is
    /// purged and the result is `None`.
    pub fn restore(&self) -> Option<Session> {
        let mut current = self.lock();
        let token = self.storage.get(&self.token_key);
        let user = self.storage.get(&self.user_key);

        let restored = match (token, user) {
            (None, None) => None,
            (Some(token), Some(user)) => match serde_json::from_str::<UserProfile>(&user) {
                Ok(profile) => match Session::new(token, profile) {
                    Ok(session) => Some(session),
                    Err(e) => {
                        tracing::warn!("Discarding persisted session: {}", e);
                        self.purge();
                        None
                    }
                },
                Err(e) => {
                    tracing::warn!("Discarding persisted session, bad profile: {}", e);
                    self.purge();
                    None
                }
            },
            _ => {
                tracing::warn!("Discarding half-persisted session");
                self.purge();
                None
            }
        };

        *current = restored.clone();
        restored
    }

    /// Persist and activate a freshly issued session.
    pub fn establish(&self, session: Session) {
        let mut current = self.lock();
        self.persist(&session);
        *current = Some(session);
    }

    /// Clear the session. Idempotent.
    pub fn logout(&self) {
        let mut current = self.lock();
        self.purge();
        *current = None;
    }

    /// Clear the session after an authentication rejection. Returns `true`
    /// only for the call that actually tore an active session down.
    pub fn invalidate(&self) -> bool {
        let mut current = self.lock();
        self.purge();
        current.take().is_some()
    }

    /// Merge `update` into the active session and persist it. The role is
    /// never changed. Returns the updated session, or `None` when signed out.
    pub fn update_profile(&self, update: &ProfileUpdate) -> Option<Session> {
        let mut current = self.lock();
        let session = current.as_mut()?;
        if let Some(first_name) = &update.first_name {
            session.user.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            session.user.last_name = last_name.clone();
        }
        if let Some(email) = &update.email {
            session.user.email = email.clone();
        }
        let updated = session.clone();
        self.persist(&updated);
        Some(updated)
    }

    pub fn current(&self) -> Option<Session> {
        self.lock().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.lock().as_ref().map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.lock().as_ref().map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.lock().as_ref().is_some_and(|s| s.has_role(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_seller(&self) -> bool {
        self.has_role(Role::Seller)
    }

    pub fn is_customer(&self) -> bool {
        self.has_role(Role::Customer)
    }

    fn persist(&self, session: &Session) {
        match serde_json::to_string(&session.user) {
            Ok(user) => {
                self.storage.set(&self.token_key, &session.token);
                self.storage.set(&self.user_key, &user);
            }
            Err(e) => tracing::warn!("Failed to serialise profile: {}", e),
        }
    }

    fn purge(&self) {
        self.storage.remove(&self.token_key);
        self.storage.remove(&self.user_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            id: 42,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_session_rejects_empty_token() {
        assert_eq!(
            Session::new("", profile(Role::Customer)),
            Err(SessionError::EmptyToken)
        );
        assert_eq!(
            Session::new("   ", profile(Role::Customer)),
            Err(SessionError::EmptyToken)
        );
    }

    #[test]
    fn test_establish_and_restore() {
        let storage = MemoryStore::new();
        let store = SessionStore::new(storage.clone());
        assert!(store.restore().is_none());

        let session = Session::new("tok-1", profile(Role::Admin)).unwrap();
        store.establish(session.clone());
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-1"));

        // A second store over the same storage sees the persisted session
        let reopened = SessionStore::open(storage, None);
        assert_eq!(reopened.current(), Some(session));
        assert!(reopened.is_admin());
        assert_eq!(reopened.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_restore_treats_malformed_storage_as_absent() {
        let storage = MemoryStore::new();
        storage.set(TOKEN_KEY, "tok");
        storage.set(USER_KEY, "{not json");

        let store = SessionStore::new(storage.clone());
        assert!(store.restore().is_none());
        assert!(!store.is_authenticated());
        // Garbage is purged
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
    }

    #[test]
    fn test_restore_requires_token_and_profile() {
        let storage = MemoryStore::new();
        storage.set(USER_KEY, &serde_json::to_string(&profile(Role::Customer)).unwrap());
        assert!(SessionStore::new(storage.clone()).restore().is_none());

        storage.set(TOKEN_KEY, "");
        storage.set(USER_KEY, &serde_json::to_string(&profile(Role::Customer)).unwrap());
        assert!(SessionStore::new(storage).restore().is_none());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let storage = MemoryStore::new();
        let store = SessionStore::new(storage.clone());
        store.establish(Session::new("tok", profile(Role::Customer)).unwrap());

        store.logout();
        assert!(store.current().is_none());
        assert!(storage.is_empty());

        store.logout();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_invalidate_reports_teardown_once() {
        let store = SessionStore::new(MemoryStore::new());
        store.establish(Session::new("tok", profile(Role::Seller)).unwrap());

        let other_handle = store.clone();
        assert!(store.invalidate());
        assert!(!other_handle.invalidate());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_has_role() {
        let store = SessionStore::new(MemoryStore::new());
        assert!(!store.has_role(Role::Customer));
        assert!(!store.is_admin());

        store.establish(Session::new("tok", profile(Role::Seller)).unwrap());
        assert!(store.is_seller());
        assert!(!store.is_admin());
        assert!(!store.is_customer());
    }

    #[test]
    fn test_update_profile_keeps_role() {
        let storage = MemoryStore::new();
        let store = SessionStore::new(storage.clone());
        assert!(store.update_profile(&ProfileUpdate::default()).is_none());

        store.establish(Session::new("tok", profile(Role::Customer)).unwrap());
        let updated = store
            .update_profile(&ProfileUpdate {
                first_name: Some("Amazing".to_string()),
                last_name: None,
                email: Some("amazing@example.com".to_string()),
            })
            .unwrap();

        assert_eq!(updated.user().first_name, "Amazing");
        assert_eq!(updated.user().last_name, "Hopper");
        assert_eq!(updated.role(), Role::Customer);
        assert_eq!(updated.token(), "tok");

        let reopened = SessionStore::open(storage, None);
        assert_eq!(reopened.user().unwrap().email, "amazing@example.com");
    }

    #[test]
    fn test_namespaced_keys() {
        let storage = MemoryStore::new();
        let store = SessionStore::with_namespace(storage.clone(), Some("shop"));
        store.establish(Session::new("tok", profile(Role::Customer)).unwrap());

        assert!(storage.get(TOKEN_KEY).is_none());
        assert_eq!(storage.get("shop:authToken").as_deref(), Some("tok"));
    }
}
