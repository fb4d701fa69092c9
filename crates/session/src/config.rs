//! Session configuration

use serde::{Deserialize, Serialize};

/// Tunables shared by the session store and the views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Storage slot holding the raw access token
    pub token_key: String,
    /// Storage slot holding the expiry, Unix milliseconds as a decimal string
    pub expiry_key: String,
    /// How long the "session expired" notice stays up before redirecting
    pub expired_notice_ms: u32,
}

impl SessionConfig {
    /// Default storage slot for the token
    pub const TOKEN_KEY: &'static str = "token";

    /// Default storage slot for the expiry
    pub const EXPIRY_KEY: &'static str = "token_expiry";

    /// Default notice delay in milliseconds
    pub const EXPIRED_NOTICE_MS: u32 = 1_500;
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: Self::TOKEN_KEY.to_string(),
            expiry_key: Self::EXPIRY_KEY.to_string(),
            expired_notice_ms: Self::EXPIRED_NOTICE_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"expired_notice_ms": 250}"#).unwrap();

        assert_eq!(config.expired_notice_ms, 250);
        assert_eq!(config.token_key, "token");
        assert_eq!(config.expiry_key, "token_expiry");
    }
}
