//! Acting-user depot extensions.

use bazaar_app::domain::users::models::{Actor, Role};
use salvo::prelude::{Depot, StatusError};

const ACTOR_KEY: &str = "bazaar.actor";

/// Access to the authenticated actor stashed by the auth middleware.
pub(crate) trait ActorExt {
    fn insert_actor(&mut self, actor: Actor);

    fn actor_or_401(&self) -> Result<Actor, StatusError>;

    /// The actor, provided it holds exactly the given role.
    fn require_role(&self, role: Role) -> Result<Actor, StatusError>;
}

impl ActorExt for Depot {
    fn insert_actor(&mut self, actor: Actor) {
        self.insert(ACTOR_KEY, actor);
    }

    fn actor_or_401(&self) -> Result<Actor, StatusError> {
        self.get::<Actor>(ACTOR_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized().brief("Authentication required"))
    }

    fn require_role(&self, role: Role) -> Result<Actor, StatusError> {
        let actor = self.actor_or_401()?;

        if actor.role == role {
            Ok(actor)
        } else {
            Err(StatusError::forbidden().brief("Insufficient role"))
        }
    }
}
