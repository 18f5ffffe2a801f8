//! Users service.

use async_trait::async_trait;
use mockall::automock;
use sha2::{Digest, Sha256};

use crate::{
    database::Db,
    domain::users::{
        data::NewUser,
        errors::UsersServiceError,
        models::{Actor, User},
        repository::PgUsersRepository,
    },
};

/// Hash a raw API token the way it is stored in the users table.
#[must_use]
pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_user(&mut tx, &user).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn authenticate_token(&self, token: &str) -> Result<Actor, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .find_by_token_hash(&mut tx, &hash_token(token))
            .await?;

        tx.commit().await?;

        user.as_ref()
            .map(Actor::from)
            .ok_or(UsersServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Provision a user; the token hash must already be computed.
    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError>;

    /// Resolve a raw API token to the acting user.
    async fn authenticate_token(&self, token: &str) -> Result<Actor, UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::users::models::{Role, UserUuid}, test::TestContext};

    use super::*;

    fn new_user(email: &str, role: Role, token: &str) -> NewUser {
        NewUser {
            uuid: UserUuid::new(),
            email: email.to_string(),
            role,
            token_hash: hash_token(token),
        }
    }

    #[tokio::test]
    async fn create_user_and_authenticate_token() -> TestResult {
        let ctx = TestContext::new().await;

        let user = ctx
            .users
            .create_user(new_user("buyer@example.com", Role::Buyer, "bz_secret"))
            .await?;

        let actor = ctx.users.authenticate_token("bz_secret").await?;

        assert_eq!(actor.uuid, user.uuid);
        assert_eq!(actor.role, Role::Buyer);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_token_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.users.authenticate_token("bz_wrong").await;

        assert!(
            matches!(result, Err(UsersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn duplicate_email_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users
            .create_user(new_user("seller@example.com", Role::Seller, "bz_one"))
            .await?;

        let result = ctx
            .users
            .create_user(new_user("seller@example.com", Role::Seller, "bz_two"))
            .await;

        assert!(
            matches!(result, Err(UsersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }
}
