//! Typed clients over the entity stores.
//!
//! Each client wraps a [`ResourceClient`](crate::actor_framework::ResourceClient)
//! and gets `get_*` and `create_*` from [`impl_basic_client!`];
//! the relation queries the services need are written by hand.

#[macro_use]
mod macros;

mod dish_client;
mod order_client;
mod payment_client;
mod restaurant_client;
mod user_client;

pub use dish_client::DishClient;
pub use order_client::OrderClient;
pub use payment_client::PaymentClient;
pub use restaurant_client::RestaurantClient;
pub use user_client::UserClient;
