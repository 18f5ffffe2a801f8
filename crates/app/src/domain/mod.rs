//! Domain modules.

pub mod categories;
pub mod lifecycle;
pub mod products;
pub mod reviews;
pub mod users;
pub mod visibility;
