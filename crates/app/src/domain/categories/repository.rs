//! Categories Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    categories::{
        data::NewCategory,
        models::{Category, CategoryUuid},
    },
    lifecycle::Lifecycle,
};

const CREATE_CATEGORY_SQL: &str = include_str!("sql/create_category.sql");
const GET_CATEGORY_SQL: &str = include_str!("sql/get_category.sql");
const DEACTIVATE_CATEGORY_SQL: &str = include_str!("sql/deactivate_category.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCategoriesRepository;

impl PgCategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: &NewCategory,
    ) -> Result<Category, sqlx::Error> {
        query_as::<Postgres, Category>(CREATE_CATEGORY_SQL)
            .bind(category.uuid.into_uuid())
            .bind(&category.name)
            .bind(category.parent_uuid.map(CategoryUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await
    }

    /// Fetch a category regardless of lifecycle state; callers apply the
    /// visibility rule themselves.
    pub(crate) async fn get_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<Option<Category>, sqlx::Error> {
        query_as::<Postgres, Category>(GET_CATEGORY_SQL)
            .bind(category.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Soft-delete an active category. Returns `None` when the category is
    /// missing or already inactive.
    pub(crate) async fn deactivate_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<Option<Category>, sqlx::Error> {
        query_as::<Postgres, Category>(DEACTIVATE_CATEGORY_SQL)
            .bind(category.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Category {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CategoryUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            parent_uuid: row
                .try_get::<Option<Uuid>, _>("parent_uuid")?
                .map(CategoryUuid::from_uuid),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            state: Lifecycle::from_deleted_at(
                row.try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                    .map(SqlxTimestamp::to_jiff),
            ),
        })
    }
}
