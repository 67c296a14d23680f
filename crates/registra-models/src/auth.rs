//! Authentication models: roles, the persisted user profile, and the
//! login/signup wire types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Role tags the backend attaches to an account.
///
/// Unrecognised tags deserialize to [`Role::Unknown`] rather than failing
/// the whole login response; they simply never match a role check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Superadmin,
    Staff,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Superadmin => write!(f, "SUPERADMIN"),
            Role::Staff => write!(f, "STAFF"),
            Role::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The normalized user profile persisted alongside the bearer token.
///
/// `roles` is always a concrete (possibly empty) list, never null, so role
/// checks stay branch-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "registra_core::serde::null_to_default")]
    pub roles: Vec<Role>,
}

impl AuthUser {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Whether this account may use the admin console at all.
    pub fn may_administer(&self) -> bool {
        self.has_role(Role::Admin) || self.has_role(Role::Superadmin)
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(email(message = "Email address is invalid"))]
    pub email: String,
}

/// `POST /api/auth/login` and `/signup` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    #[serde(default, deserialize_with = "registra_core::serde::null_to_default")]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub identifier: Option<i64>,
}

impl AuthResponse {
    /// Normalizes the response into the profile shape the session persists.
    pub fn into_user(self) -> AuthUser {
        AuthUser {
            username: self.username,
            id: self.identifier,
            roles: self.roles,
        }
    }
}
