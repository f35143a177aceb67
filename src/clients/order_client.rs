use tracing::{debug, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Order, OrderId, OrderStatus, RestaurantId, UserId};
use crate::order_actor::{OrderAction, OrderActionResult};

/// Client for interacting with the Order store.
///
/// Orchestration (pricing, authorization, events) lives in
/// [`OrderService`](crate::orders::OrderService); this client only moves
/// requests to and from the store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(OrderClient, Order, order);

impl OrderClient {
    #[instrument(skip(self))]
    pub async fn find_orders_by_customer(
        &self,
        customer_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, FrameworkError> {
        debug!("Sending request");
        self.inner
            .find(move |order| order.customer_id == Some(customer_id) && status.is_none_or(|s| order.status == s))
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_orders_by_rider(
        &self,
        rider_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, FrameworkError> {
        debug!("Sending request");
        self.inner
            .find(move |order| order.rider_id == Some(rider_id) && status.is_none_or(|s| order.status == s))
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_orders_by_restaurants(
        &self,
        restaurant_ids: Vec<RestaurantId>,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, FrameworkError> {
        debug!("Sending request");
        self.inner
            .find(move |order| {
                order.restaurant_id.is_some_and(|id| restaurant_ids.contains(&id))
                    && status.is_none_or(|s| order.status == s)
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn advance_status(&self, id: OrderId, status: OrderStatus) -> Result<OrderActionResult, FrameworkError> {
        debug!("Sending request");
        self.inner.perform_action(id, OrderAction::AdvanceStatus(status)).await
    }

    #[instrument(skip(self))]
    pub async fn assign_rider(&self, id: OrderId, rider_id: UserId) -> Result<OrderActionResult, FrameworkError> {
        debug!("Sending request");
        self.inner.perform_action(id, OrderAction::AssignRider(rider_id)).await
    }
}
