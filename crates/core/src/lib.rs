//! Warden core types shared by the HTTP client, the session manager and the
//! frontend

pub mod types;

pub use types::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, Role, UnknownRole, User,
};
