use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DishId, RestaurantId, UserId};

pub type OrderId = u64;

/// Where an order is in its lifecycle. Declared in lifecycle order, so the
/// derived `Ord` is the order in which statuses are reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Cooking,
    Cooked,
    PickedUp,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Cooking,
        OrderStatus::Cooked,
        OrderStatus::PickedUp,
        OrderStatus::Delivered,
    ];
}

/// One option picked for a line item, e.g. `Size` with choice `Large`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemOption {
    pub name: String,
    pub choice: Option<String>,
}

impl OrderItemOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), choice: None }
    }

    pub fn with_choice(name: impl Into<String>, choice: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            choice: Some(choice.into()),
        }
    }
}

/// A dish as captured at order time. Immutable once the order exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub dish_id: DishId,
    pub options: Vec<OrderItemOption>,
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: Option<UserId>,
    pub restaurant_id: Option<RestaurantId>,
    pub rider_id: Option<UserId>,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a new order. Status always starts at `Pending`.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: UserId,
    pub restaurant_id: RestaurantId,
    pub items: Vec<OrderItem>,
    pub total: f64,
}
