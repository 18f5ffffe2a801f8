//! Reviews
//!
//! Review lifecycle and the product-rating aggregator. Every mutation of the
//! active-review set recomputes the owning product's rating inside the same
//! transaction, under a product row lock.

pub mod data;
pub mod errors;
pub mod models;
pub(crate) mod repository;
pub mod service;

pub use errors::ReviewsServiceError;
pub use service::*;
