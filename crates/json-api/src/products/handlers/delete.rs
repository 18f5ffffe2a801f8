//! Deactivate Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use bazaar_app::domain::users::models::Role;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Deactivate Product Handler
///
/// Soft-deletes the product; its reviews stop counting towards anything
/// visible but remain stored.
#[endpoint(
    tags("products"),
    summary = "Deactivate Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deactivated"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the owning seller"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let seller = depot.require_role(Role::Seller)?;

    state
        .app
        .products
        .deactivate_product(seller.uuid, uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use bazaar_app::domain::products::{
        MockProductsService, ProductsServiceError, models::ProductUuid,
    };

    use crate::{
        products::handlers::tests::make_product_for,
        test_helpers::{Mocks, TEST_SELLER, service_as},
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        service_as(
            TEST_SELLER,
            Mocks {
                products,
                ..Mocks::default()
            },
            Router::with_path("products/{uuid}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_deactivate_product_success() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_deactivate_product()
            .once()
            .withf(move |seller, u| *seller == TEST_SELLER.uuid && *u == uuid)
            .return_once(move |seller, u| Ok(make_product_for(u, seller)));

        let res = TestClient::delete(format!("http://example.com/products/{uuid}"))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_deactivate_product_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::delete("http://example.com/products/123")
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_deactivate_missing_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_deactivate_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/products/{uuid}"))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
