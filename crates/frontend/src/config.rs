//! Frontend configuration

use warden_session::SessionConfig;

/// Fallback when neither the build nor the window provides an origin
const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the auth service
    pub api_base_url: String,
    pub session: SessionConfig,
}

impl AppConfig {
    /// `WARDEN_API_URL` at build time, else the page's own origin
    pub fn load() -> Self {
        let api_base_url = option_env!("WARDEN_API_URL")
            .map(str::to_string)
            .or_else(window_origin)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_base_url,
            session: SessionConfig::default(),
        }
    }
}

fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
