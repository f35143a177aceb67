use std::fmt;
use std::pin::Pin;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, warn};

use crate::domain::{Order, UserId};

/// Named topics on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// A customer placed an order; the restaurant owner should accept it.
    NewPendingOrder,
    /// An owner finished cooking; riders may pick it up.
    NewCookedOrder,
    /// Any change to an existing order.
    OrderUpdate,
}

impl Channel {
    pub fn name(&self) -> &'static str {
        match self {
            Channel::NewPendingOrder => "NEW_PENDING_ORDER",
            Channel::NewCookedOrder => "NEW_COOKED_ORDER",
            Channel::OrderUpdate => "ORDER_UPDATE",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What travels on every channel: the order as it is after the change, and
/// the owner of its restaurant at publish time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderEvent {
    pub order: Order,
    pub owner_id: Option<UserId>,
}

pub type EventStream<T> = Pin<Box<dyn Stream<Item = T> + Send>>;

/// Publishing side of the bus, as seen by the services.
pub trait Publisher: Send + Sync {
    /// Hands `event` to the current subscribers of `channel`. Never waits on
    /// them and never fails the caller.
    fn publish(&self, channel: Channel, event: OrderEvent);
}

/// Broadcast-backed bus. Cloning shares the same channels.
///
/// Each channel buffers up to `capacity` events per subscriber; a subscriber
/// that falls further behind skips the oldest ones instead of slowing the
/// publisher down.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<DashMap<Channel, broadcast::Sender<OrderEvent>>>,
    capacity: usize,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        Self {
            channels: Arc::new(DashMap::new()),
            capacity: capacity.max(1),
        }
    }

    fn sender(&self, channel: Channel) -> broadcast::Sender<OrderEvent> {
        self.channels
            .entry(channel)
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .value()
            .clone()
    }

    /// A fresh stream of every event published on `channel` from now on.
    /// Dropping the stream unsubscribes.
    pub fn subscribe(&self, channel: Channel) -> EventStream<OrderEvent> {
        let receiver = self.sender(channel).subscribe();
        debug!(%channel, "Subscriber attached");
        let stream = BroadcastStream::new(receiver).filter_map(move |received| match received {
            Ok(event) => Some(event),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                warn!(%channel, skipped, "Subscriber lagged, events dropped");
                None
            }
        });
        Box::pin(stream)
    }

    pub fn subscriber_count(&self, channel: Channel) -> usize {
        self.channels
            .get(&channel)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }
}

impl Publisher for EventBus {
    fn publish(&self, channel: Channel, event: OrderEvent) {
        let order_id = event.order.id;
        match self.sender(channel).send(event) {
            Ok(receivers) => debug!(%channel, order_id, receivers, "Event published"),
            Err(_) => debug!(%channel, order_id, "Event published with no subscribers"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;

    use super::*;
    use crate::domain::OrderStatus;

    fn event(order_id: u64) -> OrderEvent {
        OrderEvent {
            order: Order {
                id: order_id,
                customer_id: Some(1),
                restaurant_id: Some(2),
                rider_id: None,
                items: vec![],
                total: 9.0,
                status: OrderStatus::Pending,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            owner_id: Some(3),
        }
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_fine() {
        let bus = EventBus::new(8);
        bus.publish(Channel::OrderUpdate, event(1));
        assert_eq!(bus.subscriber_count(Channel::OrderUpdate), 0);
    }

    #[tokio::test]
    async fn test_every_subscriber_gets_later_events() {
        let bus = EventBus::new(8);
        bus.publish(Channel::OrderUpdate, event(1));

        let mut first = bus.subscribe(Channel::OrderUpdate);
        let mut second = bus.subscribe(Channel::OrderUpdate);
        bus.publish(Channel::OrderUpdate, event(2));

        assert_eq!(first.next().await.map(|e| e.order.id), Some(2));
        assert_eq!(second.next().await.map(|e| e.order.id), Some(2));
    }

    #[tokio::test]
    async fn test_channels_are_isolated() {
        let bus = EventBus::new(8);
        let mut cooked = bus.subscribe(Channel::NewCookedOrder);
        bus.publish(Channel::NewPendingOrder, event(1));

        let nothing = tokio::time::timeout(Duration::from_millis(50), cooked.next()).await;
        assert!(nothing.is_err());
    }

    #[tokio::test]
    async fn test_dropped_subscriber_leaves_others_alone() {
        let bus = EventBus::new(8);
        let gone = bus.subscribe(Channel::OrderUpdate);
        let mut kept = bus.subscribe(Channel::OrderUpdate);
        assert_eq!(bus.subscriber_count(Channel::OrderUpdate), 2);

        drop(gone);
        assert_eq!(bus.subscriber_count(Channel::OrderUpdate), 1);

        bus.publish(Channel::OrderUpdate, event(5));
        assert_eq!(kept.next().await.map(|e| e.order.id), Some(5));
    }

    #[tokio::test]
    async fn test_lagging_subscriber_skips_oldest() {
        let bus = EventBus::new(2);
        let mut slow = bus.subscribe(Channel::OrderUpdate);
        for id in 1..=4 {
            bus.publish(Channel::OrderUpdate, event(id));
        }

        assert_eq!(slow.next().await.map(|e| e.order.id), Some(3));
        assert_eq!(slow.next().await.map(|e| e.order.id), Some(4));
    }
}
