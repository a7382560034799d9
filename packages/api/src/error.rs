//! Error taxonomy for backend calls.

use reqwest::StatusCode;
use store::SessionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS, ...).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP 401 on an authenticated call. The session has already been torn down.
    #[error("your session has expired, please sign in again")]
    Unauthorized,

    /// The login or registration endpoint rejected the submitted credentials.
    #[error("{0}")]
    InvalidCredentials(String),

    /// A 4xx other than 401, usually a validation failure.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// A 5xx.
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// A 2xx whose body was not the expected `{ data, message }` envelope.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// An order was attempted with nothing in the cart.
    #[error("your cart is empty")]
    EmptyCart,

    /// A login/registration response that could not form a session.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// Classify a non-2xx, non-401 status with the server message, if any.
    pub(crate) fn from_status(status: StatusCode, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback_message(status));
        if status.is_server_error() {
            ApiError::Server { status, message }
        } else {
            ApiError::Rejected { status, message }
        }
    }

    /// HTTP status, when the failure came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            ApiError::Rejected { status, .. } | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Could not reach the server. Please try again.".to_string(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            other => other.to_string(),
        }
    }
}

fn fallback_message(status: StatusCode) -> String {
    format!("Request failed (HTTP {})", status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classifies() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, Some("Price must be positive".into()));
        assert!(matches!(err, ApiError::Rejected { .. }));
        assert_eq!(err.user_message(), "Price must be positive");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));

        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, None);
        assert!(matches!(err, ApiError::Server { .. }));
        assert_eq!(err.user_message(), "Request failed (HTTP 502)");
    }

    #[test]
    fn test_blank_server_message_uses_fallback() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, Some("  ".into()));
        assert_eq!(err.user_message(), "Request failed (HTTP 404)");
    }
}
