use crate::domain::{Order, Role, User, UserId};

/// Whether `user` is a party to `order`: its customer, its rider, or the
/// owner of its restaurant (`restaurant_owner`). Only the relation that
/// matches the user's role is considered.
pub fn is_party(user: &User, order: &Order, restaurant_owner: Option<UserId>) -> bool {
    let related = match user.role {
        Role::Client => order.customer_id,
        Role::Delivery => order.rider_id,
        Role::Owner => restaurant_owner,
    };
    related == Some(user.id)
}
