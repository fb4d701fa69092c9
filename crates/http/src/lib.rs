//! HTTP client for the Warden auth service
//!
//! The service exposes a small contract: `/login`, `/register` and
//! `/refresh-token` are public, `/profile` and `/admin` take a bearer token.
//! [`client::PublicClient`] and [`client::AuthenticatedClient`] split those
//! two surfaces at the type level.

pub mod client;

pub use client::{AuthenticatedClient, ClientError, PublicClient, TypedClientBuilder};
