//! Reviews service.
//!
//! Review creation and deactivation are the only ways the active-review set
//! of a product changes, and both recompute the product's stored rating
//! before committing. The product row is locked with `SELECT ... FOR UPDATE`
//! at the start of every mutation, so concurrent writers against the same
//! product serialize and the stored rating always equals the average over
//! the active reviews visible at commit time.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        products::{models::ProductUuid, repository::PgProductsRepository},
        reviews::{
            data::NewReview,
            errors::ReviewsServiceError,
            models::{MAX_GRADE, MIN_GRADE, Review, ReviewUuid},
            repository::PgReviewsRepository,
        },
        users::models::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    repository: PgReviewsRepository,
    products_repository: PgProductsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReviewsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }

    /// Recompute and store the rating for a product whose row is already
    /// locked in `tx`.
    async fn store_rating(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        product: ProductUuid,
    ) -> Result<f64, ReviewsServiceError> {
        let rating = self.repository.average_grade(tx, product).await?;

        self.repository
            .update_product_rating(tx, product, rating)
            .await?;

        Ok(rating)
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn list_reviews(&self) -> Result<Vec<Review>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let reviews = self.repository.list_reviews(&mut tx).await?;

        tx.commit().await?;

        Ok(reviews)
    }

    async fn list_product_reviews(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<Review>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        self.products_repository
            .get_product(&mut tx, product)
            .await?
            .filter(|product| product.state.is_active())
            .ok_or(ReviewsServiceError::NotFound)?;

        let reviews = self.repository.list_product_reviews(&mut tx, product).await?;

        tx.commit().await?;

        Ok(reviews)
    }

    #[tracing::instrument(
        name = "reviews.service.create_review",
        skip(self, review),
        fields(
            buyer_uuid = %buyer,
            review_uuid = %review.uuid,
            product_uuid = %review.product_uuid,
            grade = review.grade
        ),
        err
    )]
    async fn create_review(
        &self,
        buyer: UserUuid,
        review: NewReview,
    ) -> Result<Review, ReviewsServiceError> {
        if !(MIN_GRADE..=MAX_GRADE).contains(&review.grade) {
            return Err(ReviewsServiceError::InvalidGrade(review.grade));
        }

        let mut tx = self.db.begin().await?;

        // Lock the product row first: every writer that can change this
        // product's rating queues behind the same lock.
        self.products_repository
            .lock_product(&mut tx, review.product_uuid)
            .await?
            .filter(|product| product.state.is_active())
            .ok_or(ReviewsServiceError::NotFound)?;

        // One review per (buyer, product), deactivated reviews included. The
        // unique constraint backstops the race this read cannot see.
        if self
            .repository
            .find_review_by_buyer_and_product(&mut tx, buyer, review.product_uuid)
            .await?
            .is_some()
        {
            return Err(ReviewsServiceError::AlreadyExists);
        }

        let created = self.repository.create_review(&mut tx, buyer, &review).await?;

        let rating = self.store_rating(&mut tx, review.product_uuid).await?;

        tx.commit().await?;

        info!(product_uuid = %review.product_uuid, rating, "created review");

        Ok(created)
    }

    #[tracing::instrument(
        name = "reviews.service.deactivate_review",
        skip(self),
        fields(review_uuid = %review),
        err
    )]
    async fn deactivate_review(&self, review: ReviewUuid) -> Result<Review, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self
            .repository
            .get_review(&mut tx, review)
            .await?
            .filter(|review| review.state.is_active())
            .ok_or(ReviewsServiceError::NotFound)?;

        // Same lock order as creation: product row before the review write.
        self.products_repository
            .lock_product(&mut tx, existing.product_uuid)
            .await?
            .ok_or(ReviewsServiceError::NotFound)?;

        let deactivated = self
            .repository
            .deactivate_review(&mut tx, review)
            .await?
            .ok_or(ReviewsServiceError::NotFound)?;

        let rating = self.store_rating(&mut tx, existing.product_uuid).await?;

        tx.commit().await?;

        info!(product_uuid = %existing.product_uuid, rating, "deactivated review");

        Ok(deactivated)
    }

    #[tracing::instrument(
        name = "reviews.service.recompute_rating",
        skip(self),
        fields(product_uuid = %product),
        err
    )]
    async fn recompute_rating(&self, product: ProductUuid) -> Result<f64, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        self.products_repository
            .lock_product(&mut tx, product)
            .await?
            .ok_or(ReviewsServiceError::NotFound)?;

        let rating = self.store_rating(&mut tx, product).await?;

        tx.commit().await?;

        Ok(rating)
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Active reviews of active products.
    async fn list_reviews(&self) -> Result<Vec<Review>, ReviewsServiceError>;

    /// Active reviews of one active product; an inactive product reads as
    /// not found.
    async fn list_product_reviews(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<Review>, ReviewsServiceError>;

    /// Creates a review and recomputes the product's rating in the same
    /// transaction. One review per (buyer, product), regardless of lifecycle
    /// state. The target product must be visible.
    async fn create_review(
        &self,
        buyer: UserUuid,
        review: NewReview,
    ) -> Result<Review, ReviewsServiceError>;

    /// Soft-deletes an active review and recomputes the product's rating in
    /// the same transaction.
    async fn deactivate_review(&self, review: ReviewUuid) -> Result<Review, ReviewsServiceError>;

    /// Recomputes a product's rating from its active reviews, returning the
    /// stored value. Works for inactive products too, so a repair pass can
    /// settle rows hidden from readers.
    async fn recompute_rating(&self, product: ProductUuid) -> Result<f64, ReviewsServiceError>;
}
