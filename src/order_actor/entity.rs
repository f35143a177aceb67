use chrono::Utc;

use super::actions::{OrderAction, OrderActionResult};
use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderId, OrderStatus};
use crate::orders::state_machine;

impl Entity for Order {
    type Id = OrderId;
    type CreatePayload = OrderCreate;
    type Patch = (); // Orders only change through actions
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// The order is initialized with status `Pending` and no rider.
    fn from_create(id: OrderId, params: OrderCreate) -> Result<Self, String> {
        if !params.total.is_finite() || params.total < 0.0 {
            return Err(format!("Invalid total: {}", params.total));
        }
        let now = Utc::now();
        Ok(Self {
            id,
            customer_id: Some(params.customer_id),
            restaurant_id: Some(params.restaurant_id),
            rider_id: None,
            items: params.items,
            total: params.total,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    /// Handles order-specific actions.
    ///
    /// # Actions
    /// - `AdvanceStatus(target)`: applied only if `target` is later than the current status
    /// - `AssignRider(rider)`: applied only if no rider is assigned yet
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::AdvanceStatus(target) => {
                if !state_machine::moves_forward(self.status, target) {
                    return Ok(OrderActionResult::StatusNotForward { current: self.status });
                }
                self.status = target;
                self.updated_at = Utc::now();
                Ok(OrderActionResult::StatusAdvanced(self.clone()))
            }
            OrderAction::AssignRider(rider_id) => {
                if let Some(existing) = self.rider_id {
                    return Ok(OrderActionResult::RiderAlreadyAssigned { rider_id: existing });
                }
                self.rider_id = Some(rider_id);
                self.updated_at = Utc::now();
                Ok(OrderActionResult::RiderAssigned(self.clone()))
            }
        }
    }
}
