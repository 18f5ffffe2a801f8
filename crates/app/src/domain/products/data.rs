//! Products Data

use crate::domain::{categories::models::CategoryUuid, products::models::ProductUuid};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: Option<String>,
    pub price: u64,
    pub image_url: Option<String>,
    pub stock: u64,
    pub category_uuid: CategoryUuid,
}

/// Product Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: Option<String>,
    pub price: u64,
    pub image_url: Option<String>,
    pub stock: u64,
    pub category_uuid: CategoryUuid,
}
