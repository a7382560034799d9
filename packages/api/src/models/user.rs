//! # User models
//!
//! ## [`AuthResponse`]
//!
//! What `/users/login` and `/users/register` return: the profile fields plus
//! the bearer token, flattened into one object. [`AuthResponse::into_session`]
//! splits it into a [`Session`], refusing a missing or empty token.
//!
//! ## [`UserSummary`]
//!
//! The user shape returned by the profile and admin listing endpoints. It has
//! no token and may carry either split names or a single `name`.

use serde::{Deserialize, Serialize};
use store::{Role, Session, SessionError, UserProfile};

/// Credentials for `/users/login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `/users/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Login / registration response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(flatten)]
    pub user: UserProfile,
}

impl AuthResponse {
    pub fn into_session(self) -> Result<Session, SessionError> {
        let token = self.token.ok_or(SessionError::EmptyToken)?;
        Session::new(token, self.user)
    }
}

/// A user as listed by the profile and admin endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub role: Role,
}

impl UserSummary {
    /// Split names when present, else `name`, else the email.
    pub fn display_name(&self) -> String {
        let split = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !split.is_empty() {
            return split;
        }
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.email.clone(),
        }
    }
}

/// Admin edit of another user (`PUT /users/update/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_into_session() {
        let json = r#"{"id":3,"firstName":"Lin","lastName":"Ko","email":"lin@example.com","role":"SELLER","token":"abc"}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        let session = response.into_session().unwrap();
        assert_eq!(session.token(), "abc");
        assert_eq!(session.role(), Role::Seller);
        assert_eq!(session.user().first_name, "Lin");
    }

    #[test]
    fn test_auth_response_without_token_is_refused() {
        let json = r#"{"id":3,"firstName":"Lin","lastName":"Ko","email":"lin@example.com","role":"SELLER"}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_session(), Err(SessionError::EmptyToken));
    }

    #[test]
    fn test_user_summary_display_name() {
        let mut user = UserSummary {
            id: 1,
            first_name: None,
            last_name: None,
            name: Some("Sam Doe".to_string()),
            email: "sam@example.com".to_string(),
            role: Role::Customer,
        };
        assert_eq!(user.display_name(), "Sam Doe");
        user.first_name = Some("Samuel".to_string());
        assert_eq!(user.display_name(), "Samuel");
        user.first_name = None;
        user.name = None;
        assert_eq!(user.display_name(), "sam@example.com");
    }

    #[test]
    fn test_user_update_skips_unset_fields() {
        let update = UserUpdate {
            role: Some(Role::Admin),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"role":"ADMIN"}"#);
    }
}
