use crate::actor_framework::ResourceClient;
use crate::domain::Dish;

/// Client for interacting with the Dish store.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl_basic_client!(DishClient, Dish, dish);
