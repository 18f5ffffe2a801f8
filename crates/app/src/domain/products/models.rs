//! Product Models

use jiff::Timestamp;

use crate::{
    domain::{categories::models::CategoryUuid, lifecycle::Lifecycle, users::models::UserUuid},
    uuids::TypedUuid,
};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
///
/// `rating` is derived state: the mean grade of the product's active reviews,
/// `0.0` when none exist. It is written only by the rating aggregator.
#[derive(Debug, Clone)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: Option<String>,
    /// Price in minor units (pence/cents), always positive.
    pub price: u64,
    pub image_url: Option<String>,
    pub stock: u64,
    pub rating: f64,
    pub category_uuid: CategoryUuid,
    pub seller_uuid: UserUuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub state: Lifecycle,
}
