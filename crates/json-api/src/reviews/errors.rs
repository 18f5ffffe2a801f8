//! Review Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::reviews::ReviewsServiceError;

pub(crate) fn into_status_error(error: ReviewsServiceError) -> StatusError {
    match error {
        ReviewsServiceError::InvalidGrade(_) => {
            StatusError::bad_request().brief("Grade must be between 1 and 5")
        }
        ReviewsServiceError::AlreadyExists => {
            StatusError::conflict().brief("You have already reviewed this product")
        }
        ReviewsServiceError::InvalidReference
        | ReviewsServiceError::MissingRequiredData
        | ReviewsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid review payload")
        }
        ReviewsServiceError::NotFound => {
            StatusError::not_found().brief("Review or product not found")
        }
        ReviewsServiceError::Sql(source) => {
            error!("reviews storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
