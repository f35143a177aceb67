use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserId};

impl Entity for User {
    type Id = UserId;
    type CreatePayload = UserCreate;
    type Patch = ();
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &UserId {
        &self.id
    }

    fn from_create(id: UserId, payload: UserCreate) -> Result<Self, String> {
        if payload.email.trim().is_empty() {
            return Err("Email required".to_string());
        }
        Ok(User::new(id, payload.email, payload.role))
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
