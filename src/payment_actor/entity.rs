use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Payment, PaymentCreate, PaymentId};

impl Entity for Payment {
    type Id = PaymentId;
    type CreatePayload = PaymentCreate;
    type Patch = ();
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &PaymentId {
        &self.id
    }

    fn from_create(id: PaymentId, payload: PaymentCreate) -> Result<Self, String> {
        if payload.transaction_id.trim().is_empty() {
            return Err("Transaction id required".to_string());
        }
        Ok(Self {
            id,
            transaction_id: payload.transaction_id,
            user_id: payload.user_id,
            restaurant_id: payload.restaurant_id,
            created_at: Utc::now(),
        })
    }

    /// Payments are append-only.
    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Err("Payments cannot be modified".to_string())
    }

    fn on_delete(&self) -> Result<(), String> {
        Err("Payments cannot be deleted".to_string())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
