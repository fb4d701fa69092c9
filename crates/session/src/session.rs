//! Session values and outcomes

use crate::codec::{self, DecodeError};
use crate::error::SessionError;
use crate::router::{LandingRoute, landing_route_for};
use warden_core::Role;

/// A decoded, currently held access token
///
/// Everything but the token itself is derived from the token's claims on
/// construction, so the expiry can never drift from its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    expires_at_millis: i64,
    role: Role,
    subject: Option<String>,
}

impl Session {
    pub fn from_token(token: impl Into<String>) -> Result<Self, DecodeError> {
        let token = token.into();
        let claims = codec::decode(&token)?;
        Ok(Self {
            expires_at_millis: claims.expires_at_millis()?,
            role: claims.role,
            subject: claims.sub,
            token,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub const fn expires_at_millis(&self) -> i64 {
        self.expires_at_millis
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    /// The `sub` claim, usually the account email
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub const fn is_valid_at(&self, now_millis: i64) -> bool {
        self.expires_at_millis > now_millis
    }

    pub fn remaining_millis(&self, now_millis: i64) -> i64 {
        (self.expires_at_millis - now_millis).max(0)
    }

    /// Where to send the user right after login
    pub const fn landing_route(&self) -> LandingRoute {
        landing_route_for(self.role)
    }
}

/// Why the session ended, as reported to logged-out listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoutReason {
    /// The expiry timer fired
    Expired,
    /// `logout()` was called
    Explicit,
}

/// Result of an authentication attempt, folded for the views
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(Session),
    /// Rejected credentials, or an unusable token from the server
    InvalidCredentials,
    /// The session is over and silent refresh could not revive it
    ExpiredRefresh,
    /// The service could not be reached or answered unexpectedly
    Unavailable(String),
}

impl From<Result<Session, SessionError>> for AuthOutcome {
    fn from(result: Result<Session, SessionError>) -> Self {
        match result {
            Ok(session) => Self::Authenticated(session),
            Err(SessionError::InvalidCredentials | SessionError::UnusableToken(_)) => {
                Self::InvalidCredentials
            }
            Err(SessionError::ExpiredRefresh) => Self::ExpiredRefresh,
            Err(
                err @ (SessionError::Forbidden
                | SessionError::Registration(_)
                | SessionError::Transport(_)
                | SessionError::Storage(_)),
            ) => Self::Unavailable(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tests::make_token;
    use serde_json::json;

    #[test]
    fn test_session_derives_expiry_from_token() {
        let token = make_token(&json!({ "exp": 1_000, "role": "User", "sub": "ada@example.com" }));
        let session = Session::from_token(token.clone()).unwrap();

        assert_eq!(session.token(), token);
        assert_eq!(session.expires_at_millis(), 1_000_000);
        assert_eq!(session.role(), Role::User);
        assert_eq!(session.subject(), Some("ada@example.com"));
    }

    #[test]
    fn test_validity_is_strict() {
        let session = Session::from_token(make_token(&json!({ "exp": 2 }))).unwrap();

        assert!(session.is_valid_at(1_999));
        assert!(!session.is_valid_at(2_000));
        assert_eq!(session.remaining_millis(1_500), 500);
        assert_eq!(session.remaining_millis(9_000), 0);
    }

    #[test]
    fn test_landing_route_follows_role() {
        let admin = Session::from_token(make_token(&json!({ "exp": 2, "role": "Admin" }))).unwrap();
        let user = Session::from_token(make_token(&json!({ "exp": 2, "role": "User" }))).unwrap();

        assert_eq!(admin.landing_route(), LandingRoute::Admin);
        assert_eq!(user.landing_route(), LandingRoute::Profile);
    }

    #[test]
    fn test_outcome_folding() {
        assert_eq!(
            AuthOutcome::from(Err(SessionError::UnusableToken(DecodeError::MissingPayload))),
            AuthOutcome::InvalidCredentials
        );
        assert_eq!(
            AuthOutcome::from(Err(SessionError::ExpiredRefresh)),
            AuthOutcome::ExpiredRefresh
        );
        assert!(matches!(
            AuthOutcome::from(Err(SessionError::Transport("connection refused".into()))),
            AuthOutcome::Unavailable(_)
        ));
    }
}
