//! Categories Data

use crate::domain::categories::models::CategoryUuid;

/// New Category Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub name: String,
    pub parent_uuid: Option<CategoryUuid>,
}
