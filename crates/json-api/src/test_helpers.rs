//! Test helpers.

use std::sync::Arc;

use bazaar_app::{
    context::AppContext,
    domain::{
        categories::MockCategoriesService,
        products::MockProductsService,
        reviews::MockReviewsService,
        users::{
            MockUsersService,
            models::{Actor, Role, UserUuid},
        },
    },
};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_BUYER: Actor = Actor {
    uuid: UserUuid::from_uuid(Uuid::from_u128(1)),
    role: Role::Buyer,
};

pub(crate) const TEST_SELLER: Actor = Actor {
    uuid: UserUuid::from_uuid(Uuid::from_u128(2)),
    role: Role::Seller,
};

pub(crate) const TEST_ADMIN: Actor = Actor {
    uuid: UserUuid::from_uuid(Uuid::from_u128(3)),
    role: Role::Admin,
};

/// Mocked service set for one handler test. Unset services reject every call.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) categories: MockCategoriesService,
    pub(crate) products: MockProductsService,
    pub(crate) reviews: MockReviewsService,
    pub(crate) users: MockUsersService,
}

impl Mocks {
    fn into_state(self) -> Arc<State> {
        Arc::new(State::new(AppContext {
            categories: Arc::new(self.categories),
            products: Arc::new(self.products),
            reviews: Arc::new(self.reviews),
            users: Arc::new(self.users),
        }))
    }
}

pub(crate) fn state_with_users(users: MockUsersService) -> Arc<State> {
    Mocks {
        users,
        ..Mocks::default()
    }
    .into_state()
}

#[salvo::handler]
pub(crate) async fn inject_actor(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let actor = depot.obtain::<Actor>().ok().copied();

    if let Some(actor) = actor {
        depot.insert_actor(actor);
    }

    ctrl.call_next(req, depot, res).await;
}

/// Service wrapping a route with mocked state and a pre-authenticated actor.
pub(crate) fn service_as(actor: Actor, mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject(actor))
            .hoop(inject_actor)
            .push(route),
    )
}
