use serde::{Deserialize, Serialize};

use crate::domain::{DishId, Order, OrderId, OrderItemOption, OrderStatus, Restaurant, RestaurantId};
use crate::output::CoreOutput;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderItemInput {
    pub dish_id: DishId,
    #[serde(default)]
    pub options: Vec<OrderItemOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderInput {
    pub restaurant_id: RestaurantId,
    pub items: Vec<CreateOrderItemInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetOrdersInput {
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetOrderInput {
    pub id: OrderId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditOrderInput {
    pub id: OrderId,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TakeOrderInput {
    pub id: OrderId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrdersPayload {
    pub orders: Vec<Order>,
}

/// An order with its restaurant resolved. The restaurant is `None` once it
/// has been removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPayload {
    pub order: Order,
    pub restaurant: Option<Restaurant>,
}

pub type CreateOrderOutput = CoreOutput<()>;
pub type GetOrdersOutput = CoreOutput<OrdersPayload>;
pub type GetOrderOutput = CoreOutput<OrderPayload>;
pub type EditOrderOutput = CoreOutput<()>;
pub type TakeOrderOutput = CoreOutput<()>;
