use chrono::Utc;

use super::actions::RestaurantAction;
use crate::actor_framework::Entity;
use crate::domain::{Restaurant, RestaurantCreate, RestaurantId};

impl Entity for Restaurant {
    type Id = RestaurantId;
    type CreatePayload = RestaurantCreate;
    type Patch = (); // Promotion goes through `RestaurantAction`
    type Action = RestaurantAction;
    type ActionResult = Restaurant;

    fn id(&self) -> &RestaurantId {
        &self.id
    }

    fn from_create(id: RestaurantId, payload: RestaurantCreate) -> Result<Self, String> {
        if payload.name.trim().is_empty() {
            return Err("Restaurant name required".to_string());
        }
        let now = Utc::now();
        Ok(Self {
            id,
            name: payload.name,
            address: payload.address,
            category_name: payload.category_name,
            owner_id: payload.owner_id,
            is_promoted: false,
            promoted_until: None,
            created_at: now,
            updated_at: now,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, action: RestaurantAction) -> Result<Restaurant, String> {
        match action {
            RestaurantAction::Promote { until } => {
                self.is_promoted = true;
                self.promoted_until = Some(until);
                self.updated_at = Utc::now();
                Ok(self.clone())
            }
        }
    }
}
