//! Reviews Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    lifecycle::Lifecycle,
    products::models::ProductUuid,
    reviews::{
        data::NewReview,
        models::{Review, ReviewUuid},
    },
    users::models::UserUuid,
};

const LIST_REVIEWS_SQL: &str = include_str!("sql/list_reviews.sql");
const LIST_PRODUCT_REVIEWS_SQL: &str = include_str!("sql/list_product_reviews.sql");
const FIND_REVIEW_BY_BUYER_AND_PRODUCT_SQL: &str =
    include_str!("sql/find_review_by_buyer_and_product.sql");
const GET_REVIEW_SQL: &str = include_str!("sql/get_review.sql");
const CREATE_REVIEW_SQL: &str = include_str!("sql/create_review.sql");
const DEACTIVATE_REVIEW_SQL: &str = include_str!("sql/deactivate_review.sql");
const AVERAGE_GRADE_SQL: &str = include_str!("sql/average_grade.sql");
const UPDATE_PRODUCT_RATING_SQL: &str = include_str!("sql/update_product_rating.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReviewsRepository;

impl PgReviewsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Active reviews of active products.
    pub(crate) async fn list_reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Review>, sqlx::Error> {
        query_as::<Postgres, Review>(LIST_REVIEWS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Active reviews of one product. Callers check the product's own
    /// visibility before asking.
    pub(crate) async fn list_product_reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<Review>, sqlx::Error> {
        query_as::<Postgres, Review>(LIST_PRODUCT_REVIEWS_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Find a buyer's review of a product regardless of lifecycle state. A
    /// deactivated review still occupies the (buyer, product) slot.
    pub(crate) async fn find_review_by_buyer_and_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        buyer: UserUuid,
        product: ProductUuid,
    ) -> Result<Option<Review>, sqlx::Error> {
        query_as::<Postgres, Review>(FIND_REVIEW_BY_BUYER_AND_PRODUCT_SQL)
            .bind(buyer.into_uuid())
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Fetch a review regardless of lifecycle state.
    pub(crate) async fn get_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        review: ReviewUuid,
    ) -> Result<Option<Review>, sqlx::Error> {
        query_as::<Postgres, Review>(GET_REVIEW_SQL)
            .bind(review.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        buyer: UserUuid,
        review: &NewReview,
    ) -> Result<Review, sqlx::Error> {
        query_as::<Postgres, Review>(CREATE_REVIEW_SQL)
            .bind(review.uuid.into_uuid())
            .bind(buyer.into_uuid())
            .bind(review.product_uuid.into_uuid())
            .bind(review.comment.as_deref())
            .bind(i16::from(review.grade))
            .fetch_one(&mut **tx)
            .await
    }

    /// Soft-delete an active review. Returns `None` when the review is
    /// missing or already inactive.
    pub(crate) async fn deactivate_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        review: ReviewUuid,
    ) -> Result<Option<Review>, sqlx::Error> {
        query_as::<Postgres, Review>(DEACTIVATE_REVIEW_SQL)
            .bind(review.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Average grade over the product's active reviews, `0.0` when none
    /// remain.
    pub(crate) async fn average_grade(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<f64, sqlx::Error> {
        query_scalar::<Postgres, f64>(AVERAGE_GRADE_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Write the derived rating back onto the product row. Callers hold the
    /// product row lock for the whole transaction.
    pub(crate) async fn update_product_rating(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        rating: f64,
    ) -> Result<(), sqlx::Error> {
        query(UPDATE_PRODUCT_RATING_SQL)
            .bind(product.into_uuid())
            .bind(rating)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Review {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let grade = u8::try_from(row.try_get::<i16, _>("grade")?).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "grade".to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(Self {
            uuid: ReviewUuid::from_uuid(row.try_get("uuid")?),
            buyer_uuid: UserUuid::from_uuid(row.try_get("buyer_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            comment: row.try_get("comment")?,
            grade,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            state: Lifecycle::from_deleted_at(
                row.try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                    .map(SqlxTimestamp::to_jiff),
            ),
        })
    }
}
