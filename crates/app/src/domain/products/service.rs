//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        categories::{models::CategoryUuid, repository::PgCategoriesRepository},
        products::{
            data::{NewProduct, ProductUpdate},
            errors::ProductsServiceError,
            models::{Product, ProductUuid},
            repository::PgProductsRepository,
        },
        users::models::UserUuid,
        visibility,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
    categories_repository: PgCategoriesRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
            categories_repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn list_products_in_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        self.categories_repository
            .get_category(&mut tx, category)
            .await?
            .filter(|category| category.state.is_active())
            .ok_or(ProductsServiceError::NotFound)?;

        let products = self
            .repository
            .list_products_in_category(&mut tx, category)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self
            .repository
            .get_product(&mut tx, product)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        let category = self
            .categories_repository
            .get_category(&mut tx, product.category_uuid)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        tx.commit().await?;

        if !visibility::product_visible(&product, &category) {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(product)
    }

    async fn create_product(
        &self,
        seller: UserUuid,
        product: NewProduct,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        self.categories_repository
            .get_category(&mut tx, product.category_uuid)
            .await?
            .filter(|category| category.state.is_active())
            .ok_or(ProductsServiceError::InvalidReference)?;

        let created = self
            .repository
            .create_product(&mut tx, seller, &product)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        actor: UserUuid,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self
            .repository
            .get_product(&mut tx, product)
            .await?
            .filter(|product| product.state.is_active())
            .ok_or(ProductsServiceError::NotFound)?;

        if existing.seller_uuid != actor {
            return Err(ProductsServiceError::Forbidden);
        }

        self.categories_repository
            .get_category(&mut tx, update.category_uuid)
            .await?
            .filter(|category| category.state.is_active())
            .ok_or(ProductsServiceError::InvalidReference)?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &update)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn deactivate_product(
        &self,
        actor: UserUuid,
        product: ProductUuid,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self
            .repository
            .get_product(&mut tx, product)
            .await?
            .filter(|product| product.state.is_active())
            .ok_or(ProductsServiceError::NotFound)?;

        if existing.seller_uuid != actor {
            return Err(ProductsServiceError::Forbidden);
        }

        let deactivated = self
            .repository
            .deactivate_product(&mut tx, product)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(deactivated)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Visible products with stock on hand.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Active products of an active category.
    async fn list_products_in_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product through the visibility gate: an inactive
    /// product, or one in an inactive category, reads as not found.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Creates a product owned by the given seller. The target category must
    /// be active. The rating starts at `0.0` and is never caller-writable.
    async fn create_product(
        &self,
        seller: UserUuid,
        product: NewProduct,
    ) -> Result<Product, ProductsServiceError>;

    /// Updates an active product; only the owning seller may do so.
    async fn update_product(
        &self,
        actor: UserUuid,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Soft-deletes an active product; only the owning seller may do so.
    /// Deactivating an already-inactive product fails with not-found.
    async fn deactivate_product(
        &self,
        actor: UserUuid,
        product: ProductUuid,
    ) -> Result<Product, ProductsServiceError>;
}
