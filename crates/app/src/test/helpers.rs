//! Test Helpers

use uuid::Uuid;

use crate::{
    domain::{
        categories::{CategoriesService, data::NewCategory, models::CategoryUuid},
        products::{
            ProductsService,
            data::{NewProduct, ProductUpdate},
            models::{Product, ProductUuid},
        },
        reviews::{data::NewReview, models::ReviewUuid},
        users::{
            UsersService,
            data::NewUser,
            models::{Role, UserUuid},
            service::hash_token,
        },
    },
    test::TestContext,
};

pub(crate) async fn create_user(ctx: &TestContext, role: Role) -> UserUuid {
    let tag = Uuid::now_v7().simple().to_string();

    ctx.users
        .create_user(NewUser {
            uuid: UserUuid::new(),
            email: format!("{}_{tag}@example.com", role.as_str()),
            role,
            token_hash: hash_token(&format!("bz_{tag}")),
        })
        .await
        .expect("Failed to create test user")
        .uuid
}

pub(crate) async fn create_buyer(ctx: &TestContext) -> UserUuid {
    create_user(ctx, Role::Buyer).await
}

pub(crate) async fn create_seller(ctx: &TestContext) -> UserUuid {
    create_user(ctx, Role::Seller).await
}

pub(crate) async fn create_category(ctx: &TestContext) -> CategoryUuid {
    ctx.categories
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            name: "Books".to_string(),
            parent_uuid: None,
        })
        .await
        .expect("Failed to create test category")
        .uuid
}

pub(crate) fn new_product(category: CategoryUuid, price: u64, stock: u64) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        name: "Paperback".to_string(),
        description: Some("A well-thumbed paperback".to_string()),
        price,
        image_url: None,
        stock,
        category_uuid: category,
    }
}

pub(crate) fn product_update(category: CategoryUuid) -> ProductUpdate {
    ProductUpdate {
        name: "Paperback, second printing".to_string(),
        description: Some("A well-thumbed paperback".to_string()),
        price: 12_50,
        image_url: None,
        stock: 3,
        category_uuid: category,
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    seller: UserUuid,
    category: CategoryUuid,
) -> Product {
    ctx.products
        .create_product(seller, new_product(category, 10_00, 5))
        .await
        .expect("Failed to create test product")
}

pub(crate) fn new_review(product: ProductUuid, grade: u8) -> NewReview {
    NewReview {
        uuid: ReviewUuid::new(),
        product_uuid: product,
        grade,
        comment: Some("Held up well".to_string()),
    }
}
