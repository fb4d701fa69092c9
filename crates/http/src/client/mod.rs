//! Warden HTTP client

pub mod auth;
pub mod error;
pub mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedClient, PublicClient, TypedClientBuilder};

/// User agent sent by native builds; browsers ignore it
pub(crate) const USER_AGENT: &str = concat!("warden-client/", env!("CARGO_PKG_VERSION"));

/// Decode a response into `T`, or classify a non-success status
pub(crate) async fn read_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await?;
        // 201/204 responses may come back without a body
        if body.is_empty() {
            return Ok(serde_json::from_str("{}")?);
        }
        Ok(serde_json::from_slice(&body)?)
    } else {
        let text = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "auth service returned an error status");
        Err(ClientError::from_status(status, error_message(&text, status)))
    }
}

/// Pull the human readable message out of an error body
///
/// The service answers with `{"error": "..."}`; anything else is passed
/// through verbatim, and an empty body falls back to the status text.
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status.to_string();
    }

    serde_json::from_str::<warden_core::MessageResponse>(trimmed)
        .ok()
        .and_then(|parsed| parsed.error.or(parsed.message))
        .unwrap_or_else(|| trimmed.to_string())
}
