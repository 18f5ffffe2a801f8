//! Reviews Data

use crate::domain::{products::models::ProductUuid, reviews::models::ReviewUuid};

/// New Review Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub uuid: ReviewUuid,
    pub product_uuid: ProductUuid,
    pub grade: u8,
    pub comment: Option<String>,
}
