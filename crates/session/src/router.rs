//! Role based landing routes

use warden_core::Role;

/// Where unauthenticated users are sent, including after expiry
pub const ENTRY_ROUTE: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandingRoute {
    Profile,
    Admin,
}

impl LandingRoute {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Profile => "/profile",
            Self::Admin => "/admin",
        }
    }
}

/// Post-login destination for `role`
///
/// Every role is listed explicitly so adding one fails to compile here.
pub const fn landing_route_for(role: Role) -> LandingRoute {
    match role {
        Role::Admin => LandingRoute::Admin,
        Role::User => LandingRoute::Profile,
    }
}
