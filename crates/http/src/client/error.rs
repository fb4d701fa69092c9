//! Client error types

use thiserror::Error;

/// Failures surfaced by [`super::PublicClient`] and [`super::AuthenticatedClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable HTTP exchange
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 401: bad credentials, or a bearer/refresh token the server refuses
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 403: authenticated but not allowed (e.g. `/admin` as a plain user)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 400: the server rejected the payload (registration validation)
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },

    /// The body of a success response did not match the expected shape
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Classify a non-success status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::Status {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the server rejected the presented credentials or token
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Whether the request never got an HTTP answer (DNS, connection, CORS)
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Request(err) => !err.is_status() && !err.is_decode(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_REQUEST, "bad".into()),
            ClientError::BadRequest(_)
        ));
        assert!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, "nope".into()).is_unauthorized()
        );
        assert!(matches!(
            ClientError::from_status(StatusCode::FORBIDDEN, "no".into()),
            ClientError::Forbidden(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_GATEWAY, "down".into()),
            ClientError::Status { status: 502, .. }
        ));
    }

    #[test]
    fn test_server_errors_are_not_transport_errors() {
        let err = ClientError::from_status(StatusCode::SERVICE_UNAVAILABLE, "busy".into());
        assert!(!err.is_transport());
        assert!(!err.is_unauthorized());
    }
}
