//! Session error taxonomy
//!
//! Every failure from the HTTP client, the codec and the store is translated
//! into a [`SessionError`] before it leaves the manager.

use crate::codec::DecodeError;
use crate::store::StoreError;
use warden_http::ClientError;

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The service rejected the email/password pair
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The service answered with a token the client cannot read
    #[error("received an unusable token: {0}")]
    UnusableToken(DecodeError),

    /// No valid session and silent refresh failed; the user must log in again
    #[error("session expired")]
    ExpiredRefresh,

    /// Authenticated, but not allowed to see the resource
    #[error("access denied")]
    Forbidden,

    #[error("registration rejected: {0}")]
    Registration(String),

    /// The service could not be reached or answered with an unexpected status
    #[error("auth service unavailable: {0}")]
    Transport(String),

    #[error("session storage failed: {0}")]
    Storage(#[from] StoreError),
}

impl SessionError {
    /// Classify a failed `POST /login`
    pub(crate) fn from_login(err: ClientError) -> Self {
        match err {
            ClientError::Unauthorized(_) => Self::InvalidCredentials,
            other => Self::Transport(other.to_string()),
        }
    }

    /// Classify a failed `POST /refresh-token`
    ///
    /// Any answer from the service means the refresh credential is no good;
    /// only a request that never got an answer is reported as transport.
    pub(crate) fn from_refresh(err: &ClientError) -> Self {
        if err.is_transport() {
            Self::Transport(err.to_string())
        } else {
            Self::ExpiredRefresh
        }
    }

    /// Classify a failed `POST /register`
    pub(crate) fn from_register(err: ClientError) -> Self {
        match err {
            ClientError::BadRequest(message) => Self::Registration(message),
            other => Self::Transport(other.to_string()),
        }
    }

    /// Classify a failed bearer-protected call (`/profile`, `/admin`)
    pub(crate) fn from_protected(err: ClientError) -> Self {
        match err {
            ClientError::Unauthorized(_) => Self::ExpiredRefresh,
            ClientError::Forbidden(_) => Self::Forbidden,
            other => Self::Transport(other.to_string()),
        }
    }

    /// Whether the view should send the user back to the entry route
    pub const fn requires_reauthentication(&self) -> bool {
        matches!(self, Self::ExpiredRefresh)
    }

    /// Inline text for the form or page that triggered the failure
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials | Self::UnusableToken(_) => "Invalid credentials".to_string(),
            Self::ExpiredRefresh => "Session expired. Please login again.".to_string(),
            Self::Forbidden => "You do not have permission to view this page.".to_string(),
            Self::Registration(reason) if !reason.is_empty() => {
                format!("Registration failed: {reason}")
            }
            Self::Registration(_) => "Registration failed. Please check your input.".to_string(),
            Self::Transport(_) => "Could not reach the server. Please try again.".to_string(),
            Self::Storage(_) => "Your browser refused to store the session.".to_string(),
        }
    }
}
