//! Auth service endpoints

use super::{
    error::ClientError,
    typed::{AuthenticatedClient, PublicClient},
};
use reqwest::Method;
use warden_core::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, User};

/// Public endpoints
impl PublicClient {
    /// `POST /login`: exchange credentials for an access token
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let req = self.request(Method::POST, "/login").json(request);
        self.execute(req).await
    }

    /// `POST /register`: create an account; the response carries no token
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ClientError> {
        let req = self.request(Method::POST, "/register").json(request);
        self.execute(req).await
    }

    /// `POST /refresh-token`: mint a new access token from the refresh cookie
    pub async fn refresh_token(&self) -> Result<LoginResponse, ClientError> {
        let req = self.request(Method::POST, "/refresh-token");
        self.execute(req).await
    }
}

/// Bearer-protected endpoints
impl AuthenticatedClient {
    /// `GET /profile`: the caller's own record
    pub async fn profile(&self) -> Result<User, ClientError> {
        let req = self.request(Method::GET, "/profile");
        self.execute(req).await
    }

    /// `GET /admin`: admin-only view, 403 for everyone else
    pub async fn admin(&self) -> Result<User, ClientError> {
        let req = self.request(Method::GET, "/admin");
        self.execute(req).await
    }
}
