//! Which statuses a role may set, and in which direction statuses move.
//!
//! ```text
//! Pending -> Cooking -> Cooked -> PickedUp -> Delivered
//!            \____ Owner ____/   \____ Delivery ____/
//! ```

use crate::domain::{OrderStatus, Role};

/// Statuses each role is allowed to set.
pub fn permitted_targets(role: Role) -> &'static [OrderStatus] {
    match role {
        Role::Owner => &[OrderStatus::Cooking, OrderStatus::Cooked],
        Role::Delivery => &[OrderStatus::PickedUp, OrderStatus::Delivered],
        Role::Client => &[],
    }
}

/// Whether `role` may set an order to `target`. Says nothing about the
/// order's current status; see [`moves_forward`].
pub fn can_transition(role: Role, target: OrderStatus) -> bool {
    permitted_targets(role).contains(&target)
}

/// Whether going from `current` to `target` moves the order forward.
/// Skipping intermediate statuses is allowed; standing still is not.
pub fn moves_forward(current: OrderStatus, target: OrderStatus) -> bool {
    target > current
}
