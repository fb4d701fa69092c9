//! The auth service calls the session manager depends on

use async_trait::async_trait;
use warden_core::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, User};
use warden_http::{ClientError, PublicClient};

/// Network seam of the session manager
///
/// Futures are not `Send`: browser fetches live on the single JS thread.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError>;

    async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ClientError>;

    /// Relies on the ambient refresh credential (an HttpOnly cookie)
    async fn refresh_token(&self) -> Result<LoginResponse, ClientError>;

    async fn profile(&self, token: &str) -> Result<User, ClientError>;

    async fn admin(&self, token: &str) -> Result<User, ClientError>;
}

#[async_trait(?Send)]
impl AuthApi for PublicClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        PublicClient::login(self, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ClientError> {
        PublicClient::register(self, request).await
    }

    async fn refresh_token(&self) -> Result<LoginResponse, ClientError> {
        PublicClient::refresh_token(self).await
    }

    async fn profile(&self, token: &str) -> Result<User, ClientError> {
        self.authenticate(token).profile().await
    }

    async fn admin(&self, token: &str) -> Result<User, ClientError> {
        self.authenticate(token).admin().await
    }
}
