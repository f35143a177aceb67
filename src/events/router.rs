use tokio_stream::StreamExt;
use tracing::{debug, instrument};

use super::bus::{Channel, EventBus, EventStream, OrderEvent};
use crate::auth::{guard, RoleGuard};
use crate::domain::{Order, OrderId, Role, User};
use crate::order_actor::OrderError;
use crate::orders::authorization::is_party;

/// The three order streams clients can subscribe to, each filtered for the
/// subscribing user.
#[derive(Clone)]
pub struct SubscriptionRouter {
    bus: EventBus,
}

impl SubscriptionRouter {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }

    /// New orders placed at any restaurant `owner` owns.
    #[instrument(skip(self, owner), fields(user_id = owner.id))]
    pub fn pending_orders(&self, owner: &User) -> Result<EventStream<Order>, OrderError> {
        guard(owner, RoleGuard::Only(&[Role::Owner]), OrderError::NotAuthorized)?;
        let owner_id = owner.id;
        Ok(self.filtered(Channel::NewPendingOrder, move |event| event.owner_id == Some(owner_id)))
    }

    /// Every order that finished cooking. Riders see all of them.
    #[instrument(skip(self, rider), fields(user_id = rider.id))]
    pub fn cooked_orders(&self, rider: &User) -> Result<EventStream<Order>, OrderError> {
        guard(rider, RoleGuard::Only(&[Role::Delivery]), OrderError::NotAuthorized)?;
        Ok(self.filtered(Channel::NewCookedOrder, |_| true))
    }

    /// Changes to one order, delivered only while `user` is a party to it.
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub fn order_updates(&self, user: &User, order_id: OrderId) -> Result<EventStream<Order>, OrderError> {
        guard(user, RoleGuard::Any, OrderError::NotAuthorized)?;
        let user = user.clone();
        Ok(self.filtered(Channel::OrderUpdate, move |event| {
            event.order.id == order_id && is_party(&user, &event.order, event.owner_id)
        }))
    }

    fn filtered<F>(&self, channel: Channel, pass: F) -> EventStream<Order>
    where
        F: Fn(&OrderEvent) -> bool + Send + 'static,
    {
        let stream = self.bus.subscribe(channel).filter_map(move |event| {
            if pass(&event) {
                Some(event.order)
            } else {
                debug!(%channel, order_id = event.order.id, "Event filtered out");
                None
            }
        });
        Box::pin(stream)
    }
}
