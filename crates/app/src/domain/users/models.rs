//! User Models

use std::str::FromStr;

use jiff::Timestamp;
use thiserror::Error;

use crate::{domain::lifecycle::Lifecycle, uuids::TypedUuid};

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// Account role. Role policy lives in the request-handling layer; services
/// only see the data-dependent ownership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Buyer,
    Seller,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
            Self::Admin => "admin",
        }
    }
}

/// Error for a role string that is not `buyer`, `seller` or `admin`.
#[derive(Debug, Error)]
#[error("unknown role {0:?}")]
pub struct UnknownRole(String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "buyer" => Ok(Self::Buyer),
            "seller" => Ok(Self::Seller),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// User Model
#[derive(Debug, Clone)]
pub struct User {
    pub uuid: UserUuid,
    pub email: String,
    pub role: Role,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub state: Lifecycle,
}

/// Acting identity resolved from an API token by the auth middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub uuid: UserUuid,
    pub role: Role,
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self {
            uuid: user.uuid,
            role: user.role,
        }
    }
}
