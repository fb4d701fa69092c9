//! Bearer token claim decoding
//!
//! Tokens are compact `header.payload.signature` strings. Only the payload is
//! read; the signature is checked by the auth service, never here. Every
//! malformed input yields a [`DecodeError`] so callers can treat it exactly
//! like "no session".

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use warden_core::Role;

/// Claims the client cares about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Absolute expiry, Unix seconds
    pub exp: i64,
    /// Missing roles read as `User`, same as the service's own fallback
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl Claims {
    /// Expiry in Unix milliseconds
    pub fn expires_at_millis(&self) -> Result<i64, DecodeError> {
        self.exp
            .checked_mul(1000)
            .ok_or(DecodeError::ExpiryOutOfRange(self.exp))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("token has no payload segment")]
    MissingPayload,

    #[error("token payload is not valid base64: {0}")]
    Base64(String),

    #[error("token payload is not a claims record: {0}")]
    Claims(String),

    #[error("token expiry {0} is out of range")]
    ExpiryOutOfRange(i64),
}

/// Decode the claims of `token` without verifying its signature
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or(DecodeError::MissingPayload)?;

    let bytes = decode_segment(payload)?;
    let claims: Claims =
        serde_json::from_slice(&bytes).map_err(|e| DecodeError::Claims(e.to_string()))?;

    // Reject now rather than when the expiry is first used
    claims.expires_at_millis()?;
    Ok(claims)
}

/// Issued tokens use the URL-safe alphabet; hand-built ones sometimes use
/// the standard one and keep their padding.
fn decode_segment(segment: &str) -> Result<Vec<u8>, DecodeError> {
    let unpadded = segment.trim_end_matches('=');
    URL_SAFE_NO_PAD
        .decode(unpadded)
        .or_else(|_| STANDARD_NO_PAD.decode(unpadded))
        .map_err(|e| DecodeError::Base64(e.to_string()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// Build an unsigned token around `claims`
    pub(crate) fn make_token(claims: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn test_decode_reads_exp_and_role() {
        let token = make_token(&json!({ "sub": "ada@example.com", "role": "Admin", "exp": 1_700_000_000 }));
        let claims = decode(&token).unwrap();

        assert_eq!(claims.exp, 1_700_000_000);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.sub.as_deref(), Some("ada@example.com"));
        assert_eq!(claims.expires_at_millis().unwrap(), 1_700_000_000_000);
    }

    #[test]
    fn test_decode_missing_role_is_user() {
        let token = make_token(&json!({ "exp": 10 }));
        assert_eq!(decode(&token).unwrap().role, Role::User);
    }

    #[test]
    fn test_decode_without_second_segment() {
        for token in ["", "abc", "no-dots-at-all"] {
            assert_eq!(decode(token), Err(DecodeError::MissingPayload), "{token:?}");
        }
    }

    #[test]
    fn test_decode_two_segments_is_enough() {
        let payload = URL_SAFE_NO_PAD.encode(json!({ "exp": 5, "role": "User" }).to_string());
        let claims = decode(&format!("header.{payload}")).unwrap();
        assert_eq!(claims.exp, 5);
    }

    #[test]
    fn test_decode_bad_base64() {
        assert!(matches!(decode("a.!!!.c"), Err(DecodeError::Base64(_))));
    }

    #[test]
    fn test_decode_not_json() {
        let payload = URL_SAFE_NO_PAD.encode("not json");
        assert!(matches!(
            decode(&format!("a.{payload}.c")),
            Err(DecodeError::Claims(_))
        ));
    }

    #[test]
    fn test_decode_missing_exp() {
        let token = make_token(&json!({ "role": "Admin" }));
        assert!(matches!(decode(&token), Err(DecodeError::Claims(_))));
    }

    #[test]
    fn test_decode_accepts_padded_standard_alphabet() {
        let payload = base64::engine::general_purpose::STANDARD
            .encode(json!({ "exp": 99, "role": "user" }).to_string());
        let claims = decode(&format!("h.{payload}.s")).unwrap();
        assert_eq!(claims.exp, 99);
        assert_eq!(claims.role, Role::User);
    }

    #[test]
    fn test_decode_rejects_overflowing_expiry() {
        let token = make_token(&json!({ "exp": i64::MAX }));
        assert_eq!(decode(&token), Err(DecodeError::ExpiryOutOfRange(i64::MAX)));
    }
}
