//! Users Data

use crate::domain::users::models::{Role, UserUuid};

/// New User Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub email: String,
    pub role: Role,
    pub token_hash: String,
}
