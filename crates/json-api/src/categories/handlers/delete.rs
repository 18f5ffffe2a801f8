//! Deactivate Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use bazaar_app::domain::users::models::Role;

use crate::{categories::errors::into_status_error, extensions::*, state::State};

/// Deactivate Category Handler
///
/// Soft-deletes the category; every product in it becomes invisible.
#[endpoint(
    tags("categories"),
    summary = "Deactivate Category",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Category deactivated"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin role required"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let _admin = depot.require_role(Role::Admin)?;

    state
        .app
        .categories
        .deactivate_category(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::TestClient;
    use testresult::TestResult;

    use bazaar_app::domain::{
        categories::{
            CategoriesServiceError, MockCategoriesService,
            models::{Category, CategoryUuid},
        },
        lifecycle::Lifecycle,
        users::models::Actor,
    };

    use crate::test_helpers::{Mocks, TEST_ADMIN, TEST_BUYER, service_as};

    use super::*;

    fn make_service_as(actor: Actor, categories: MockCategoriesService) -> Service {
        service_as(
            actor,
            Mocks {
                categories,
                ..Mocks::default()
            },
            Router::with_path("categories/{uuid}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_deactivate_category_success() -> TestResult {
        let uuid = CategoryUuid::new();

        let mut categories = MockCategoriesService::new();

        categories
            .expect_deactivate_category()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|u| {
                Ok(Category {
                    uuid: u,
                    name: "Books".to_string(),
                    parent_uuid: None,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                    state: Lifecycle::Deactivated(Timestamp::UNIX_EPOCH),
                })
            });

        let res = TestClient::delete(format!("http://example.com/categories/{uuid}"))
            .send(&make_service_as(TEST_ADMIN, categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_deactivate_category_as_buyer_returns_403() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories.expect_deactivate_category().never();

        let res = TestClient::delete(format!(
            "http://example.com/categories/{}",
            CategoryUuid::new()
        ))
        .send(&make_service_as(TEST_BUYER, categories))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_deactivate_missing_category_returns_404() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_deactivate_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::NotFound));

        let res = TestClient::delete(format!(
            "http://example.com/categories/{}",
            CategoryUuid::new()
        ))
        .send(&make_service_as(TEST_ADMIN, categories))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
