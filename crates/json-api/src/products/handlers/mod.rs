//! Product Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[cfg(test)]
pub(crate) mod tests {
    use bazaar_app::domain::{
        categories::models::CategoryUuid,
        lifecycle::Lifecycle,
        products::models::{Product, ProductUuid},
        users::models::UserUuid,
    };
    use jiff::Timestamp;

    use crate::test_helpers::TEST_SELLER;

    pub(crate) fn make_product(uuid: ProductUuid, category: CategoryUuid) -> Product {
        Product {
            uuid,
            name: "Paperback".to_string(),
            description: None,
            price: 10_00,
            image_url: None,
            stock: 5,
            rating: 0.0,
            category_uuid: category,
            seller_uuid: TEST_SELLER.uuid,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            state: Lifecycle::Active,
        }
    }

    pub(crate) fn make_product_for(uuid: ProductUuid, seller: UserUuid) -> Product {
        Product {
            seller_uuid: seller,
            ..make_product(uuid, CategoryUuid::new())
        }
    }
}
