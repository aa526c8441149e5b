//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! `Credentials` is exactly the `POST /login` response body and also the unit
//! the credential store persists, so the four session fields only ever move
//! together.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role, fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }

    /// Landing route after login for this role.
    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Student => "/student",
            Self::Admin => "/admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored or received role string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// An authenticated identity as returned by `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Opaque bearer token (three-part, dot-delimited).
    pub token: String,
    pub role: Role,
    /// Display name.
    pub username: String,
    pub email: String,
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The signed-in user's profile from `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub role: Role,
    /// Whether the user currently holds a paid quiz subscription.
    #[serde(default)]
    pub subscribed: bool,
    /// ISO 8601 date the account was created, if the server reports it.
    #[serde(default)]
    pub member_since: Option<String>,
}
