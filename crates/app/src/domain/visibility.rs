//! Product visibility gate.
//!
//! Pure predicates over already-loaded state. An entity is observable only if
//! it and its owning entity are active; callers report invisible entities as
//! not found, so they are indistinguishable from nonexistent ones. Listing
//! queries express the same chain as SQL join filters.

use crate::domain::{
    categories::models::Category, products::models::Product, reviews::models::Review,
};

/// A product is visible only while both it and its category are active.
#[must_use]
pub fn product_visible(product: &Product, category: &Category) -> bool {
    product.state.is_active() && category.state.is_active()
}

/// A review is visible only while both it and its product are active.
#[must_use]
pub fn review_visible(review: &Review, product: &Product) -> bool {
    review.state.is_active() && product.state.is_active()
}
