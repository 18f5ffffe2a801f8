//! Create Review Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::{reviews::data::NewReview, users::models::Role};

use crate::{extensions::*, reviews::errors::into_status_error, state::State};

/// Create Review Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateReviewRequest {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub grade: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(request: CreateReviewRequest) -> Self {
        NewReview {
            uuid: request.uuid.into(),
            product_uuid: request.product_uuid.into(),
            grade: request.grade,
            comment: request.comment,
        }
    }
}

/// Review Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewCreatedResponse {
    /// Created review UUID
    pub uuid: Uuid,
}

/// Create Review Handler
///
/// Creates a review; the product's rating is recomputed before the response
/// is produced.
#[endpoint(
    tags("reviews"),
    summary = "Create Review",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
        (status_code = StatusCode::CONFLICT, description = "Review already exists"),
        (status_code = StatusCode::FORBIDDEN, description = "Buyer role required"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let buyer = depot.require_role(Role::Buyer)?;

    let uuid = state
        .app
        .reviews
        .create_review(buyer.uuid, json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/reviews/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ReviewCreatedResponse { uuid: uuid.into() }))
}
