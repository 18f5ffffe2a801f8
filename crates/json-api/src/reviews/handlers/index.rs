//! Review Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::reviews::models::Review;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    /// The unique identifier of the review
    pub uuid: Uuid,

    /// The buyer who wrote the review
    pub buyer_uuid: Uuid,

    /// The reviewed product
    pub product_uuid: Uuid,

    /// Optional free-text comment
    pub comment: Option<String>,

    /// Grade between 1 and 5
    pub grade: u8,

    /// The date and time the review was created
    pub created_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        ReviewResponse {
            uuid: review.uuid.into(),
            buyer_uuid: review.buyer_uuid.into(),
            product_uuid: review.product_uuid.into(),
            comment: review.comment,
            grade: review.grade,
            created_at: review.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewsResponse {
    /// The list of reviews
    pub reviews: Vec<ReviewResponse>,
}

/// Review Index Handler
///
/// Returns the visible reviews across all visible products.
#[endpoint(
    tags("reviews"),
    summary = "List Reviews",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let _actor = depot.actor_or_401()?;

    let reviews = state
        .app
        .reviews
        .list_reviews()
        .await
        .or_500("failed to fetch reviews")?;

    Ok(Json(ReviewsResponse {
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}
