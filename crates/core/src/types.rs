use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role claim carried by access tokens and profile responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Role {
    Admin,
    #[default]
    User,
}

/// Error returned by the strict [`Role`] parser
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }

    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Lenient conversion used when reading claims: the auth service falls back
/// to `User` for any role it does not recognise, so the client does too.
impl From<String> for Role {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User record returned by `GET /profile` and `GET /admin`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// First and last name joined, skipping whichever is missing
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Generic `{ "message": ... }` / `{ "error": ... }` body used by the auth
/// service for non-token responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("USER".parse::<Role>(), Ok(Role::User));
        assert_eq!(
            "auditor".parse::<Role>(),
            Err(UnknownRole("auditor".to_string()))
        );
    }

    #[test]
    fn test_role_deserialize_falls_back_to_user() {
        let role: Role = serde_json::from_value(json!("Admin")).unwrap();
        assert_eq!(role, Role::Admin);

        let role: Role = serde_json::from_value(json!("moderator")).unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_role_serializes_capitalised() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("Admin"));
        assert_eq!(Role::User.to_string(), "User");
    }

    #[test]
    fn test_user_tolerates_server_fields() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "email": "ada@example.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "password": "$2b$12$hash",
            "role": "admin"
        }))
        .unwrap();

        assert_eq!(user.id, Some(7));
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_full_name_skips_missing_parts() {
        let user = User {
            id: None,
            email: None,
            first_name: Some("Ada".to_string()),
            last_name: None,
            role: Role::User,
        };
        assert_eq!(user.full_name(), "Ada");
    }
}
