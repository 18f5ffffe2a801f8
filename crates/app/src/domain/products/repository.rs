//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    categories::models::CategoryUuid,
    lifecycle::Lifecycle,
    products::{
        data::{NewProduct, ProductUpdate},
        models::{Product, ProductUuid},
    },
    users::models::UserUuid,
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LIST_PRODUCTS_IN_CATEGORY_SQL: &str = include_str!("sql/list_products_in_category.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LOCK_PRODUCT_SQL: &str = include_str!("sql/lock_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DEACTIVATE_PRODUCT_SQL: &str = include_str!("sql/deactivate_product.sql");

fn to_db_amount(index: &str, value: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: Box::new(e),
    })
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Visible products with stock on hand: product and category both active.
    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_products_in_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_IN_CATEGORY_SQL)
            .bind(category.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Fetch a product regardless of lifecycle state; callers apply the
    /// visibility chain themselves.
    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Fetch a product with a row lock held until the transaction ends.
    ///
    /// Rating recomputation and review mutations take this lock first, so all
    /// writers touching one product's rating serialize on its row.
    pub(crate) async fn lock_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LOCK_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        seller: UserUuid,
        product: &NewProduct,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(product.description.as_deref())
            .bind(to_db_amount("price", product.price)?)
            .bind(product.image_url.as_deref())
            .bind(to_db_amount("stock", product.stock)?)
            .bind(product.category_uuid.into_uuid())
            .bind(seller.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Update an active product. Returns `None` when the product is missing
    /// or inactive.
    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        update: &ProductUpdate,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(&update.name)
            .bind(update.description.as_deref())
            .bind(to_db_amount("price", update.price)?)
            .bind(update.image_url.as_deref())
            .bind(to_db_amount("stock", update.stock)?)
            .bind(update.category_uuid.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Soft-delete an active product. Returns `None` when the product is
    /// missing or already inactive, which makes the one-way transition an
    /// idempotence failure rather than a silent no-op.
    pub(crate) async fn deactivate_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(DEACTIVATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price = u64::try_from(row.try_get::<i64, _>("price")?).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "price".to_string(),
                source: Box::new(e),
            }
        })?;

        let stock = u64::try_from(row.try_get::<i64, _>("stock")?).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "stock".to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price,
            image_url: row.try_get("image_url")?,
            stock,
            rating: row.try_get("rating")?,
            category_uuid: CategoryUuid::from_uuid(row.try_get("category_uuid")?),
            seller_uuid: UserUuid::from_uuid(row.try_get("seller_uuid")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            state: Lifecycle::from_deleted_at(
                row.try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                    .map(SqlxTimestamp::to_jiff),
            ),
        })
    }
}
