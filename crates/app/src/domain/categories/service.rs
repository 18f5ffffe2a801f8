//! Categories service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::categories::{
        data::NewCategory,
        errors::CategoriesServiceError,
        models::{Category, CategoryUuid},
        repository::PgCategoriesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        if let Some(parent) = category.parent_uuid {
            self.repository
                .get_category(&mut tx, parent)
                .await?
                .filter(|parent| parent.state.is_active())
                .ok_or(CategoriesServiceError::InvalidReference)?;
        }

        let created = self.repository.create_category(&mut tx, &category).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Category, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let category = self.repository.get_category(&mut tx, category).await?;

        tx.commit().await?;

        // An inactive category is indistinguishable from a missing one.
        category
            .filter(|category| category.state.is_active())
            .ok_or(CategoriesServiceError::NotFound)
    }

    async fn deactivate_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Category, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let deactivated = self
            .repository
            .deactivate_category(&mut tx, category)
            .await?
            .ok_or(CategoriesServiceError::NotFound)?;

        tx.commit().await?;

        Ok(deactivated)
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Creates a new category; the parent, when given, must be active.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, CategoriesServiceError>;

    /// Retrieve a single active category.
    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Category, CategoriesServiceError>;

    /// Soft-delete an active category, hiding all of its products.
    async fn deactivate_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Category, CategoriesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn create_category_returns_active_category() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = CategoryUuid::new();

        let category = ctx
            .categories
            .create_category(NewCategory {
                uuid,
                name: "Books".to_string(),
                parent_uuid: None,
            })
            .await?;

        assert_eq!(category.uuid, uuid);
        assert_eq!(category.name, "Books");
        assert!(category.state.is_active());

        Ok(())
    }

    #[tokio::test]
    async fn create_category_with_unknown_parent_returns_invalid_reference() {
        let ctx = TestContext::new().await;

        let result = ctx
            .categories
            .create_category(NewCategory {
                uuid: CategoryUuid::new(),
                name: "Orphans".to_string(),
                parent_uuid: Some(CategoryUuid::new()),
            })
            .await;

        assert!(
            matches!(result, Err(CategoriesServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_child_category_links_parent() -> TestResult {
        let ctx = TestContext::new().await;

        let parent = ctx
            .categories
            .create_category(NewCategory {
                uuid: CategoryUuid::new(),
                name: "Books".to_string(),
                parent_uuid: None,
            })
            .await?;

        let child = ctx
            .categories
            .create_category(NewCategory {
                uuid: CategoryUuid::new(),
                name: "Science Fiction".to_string(),
                parent_uuid: Some(parent.uuid),
            })
            .await?;

        assert_eq!(child.parent_uuid, Some(parent.uuid));

        Ok(())
    }

    #[tokio::test]
    async fn get_category_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.categories.get_category(CategoryUuid::new()).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn deactivated_category_reads_as_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let category = ctx
            .categories
            .create_category(NewCategory {
                uuid: CategoryUuid::new(),
                name: "Clearance".to_string(),
                parent_uuid: None,
            })
            .await?;

        let deactivated = ctx.categories.deactivate_category(category.uuid).await?;

        assert!(deactivated.state.deactivated_at().is_some());

        let result = ctx.categories.get_category(category.uuid).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::NotFound)),
            "expected NotFound after deactivation, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn deactivating_category_twice_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let category = ctx
            .categories
            .create_category(NewCategory {
                uuid: CategoryUuid::new(),
                name: "Seasonal".to_string(),
                parent_uuid: None,
            })
            .await?;

        ctx.categories.deactivate_category(category.uuid).await?;

        let result = ctx.categories.deactivate_category(category.uuid).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::NotFound)),
            "second deactivation must fail, got {result:?}"
        );

        Ok(())
    }
}
