//! Product Reviews Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, index::ReviewsResponse},
    state::State,
};

/// Product Reviews Handler
///
/// Returns the visible reviews of one visible product.
#[endpoint(
    tags("reviews"),
    summary = "List Product Reviews",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Reviews of the product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let _actor = depot.actor_or_401()?;

    let reviews = state
        .app
        .reviews
        .list_product_reviews(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ReviewsResponse {
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}
