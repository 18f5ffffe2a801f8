//! Review Models

use jiff::Timestamp;

use crate::{
    domain::{lifecycle::Lifecycle, products::models::ProductUuid, users::models::UserUuid},
    uuids::TypedUuid,
};

/// Review UUID
pub type ReviewUuid = TypedUuid<Review>;

/// Grade bounds, inclusive.
pub const MIN_GRADE: u8 = 1;
pub const MAX_GRADE: u8 = 5;

/// Review Model
///
/// At most one review exists per (buyer, product) pair, regardless of
/// lifecycle state. Reviews are never edited; the only transition is a
/// one-way deactivation by an admin.
#[derive(Debug, Clone)]
pub struct Review {
    pub uuid: ReviewUuid,
    pub buyer_uuid: UserUuid,
    pub product_uuid: ProductUuid,
    pub comment: Option<String>,
    pub grade: u8,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub state: Lifecycle,
}
