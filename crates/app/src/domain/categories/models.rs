//! Category Models

use jiff::Timestamp;

use crate::{domain::lifecycle::Lifecycle, uuids::TypedUuid};

/// Category UUID
pub type CategoryUuid = TypedUuid<Category>;

/// Category Model
///
/// Categories form a tree through `parent_uuid`. An inactive category hides
/// all of its products from listings and detail fetches.
#[derive(Debug, Clone)]
pub struct Category {
    pub uuid: CategoryUuid,
    pub name: String,
    pub parent_uuid: Option<CategoryUuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub state: Lifecycle,
}
