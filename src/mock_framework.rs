//! # Mock Framework
//!
//! Utilities for testing services without spawning stores.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! mailbox, then answer the requests with [`expect_get`], [`expect_find`],
//! [`expect_create`] or [`expect_action`]. Dropping a responder makes the
//! caller see [`FrameworkError::ActorDropped`], which is how store faults are
//! simulated.
//!
//! [`RecordingPublisher`] stands in for the event bus.

use std::sync::Mutex;

use tokio::sync::mpsc;

use crate::actor_framework::{Entity, Filter, FrameworkError, ResourceClient, ResourceRequest, Response};
use crate::events::{Channel, OrderEvent, Publisher};

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message must be a Create request.
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Next message must be a Get request.
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message must be a Find request.
pub async fn expect_find<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Filter<T>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Next message must be an Action request.
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Answers a Find request by running its filter over `items`.
pub fn answer_find<T: Entity>(filter: Filter<T>, respond_to: Response<Vec<T>>, items: &[T]) {
    let found = items.iter().filter(|item| filter(*item)).cloned().collect();
    let _ = respond_to.send(Ok(found));
}

/// Publisher that keeps everything it is given, in order.
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<(Channel, OrderEvent)>>,
}

impl RecordingPublisher {
    pub fn events(&self) -> Vec<(Channel, OrderEvent)> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    pub fn channels(&self) -> Vec<Channel> {
        self.events().into_iter().map(|(channel, _)| channel).collect()
    }
}

impl Publisher for RecordingPublisher {
    fn publish(&self, channel: Channel, event: OrderEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push((channel, event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Order, OrderStatus, Role, User, UserCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<User>(10);

        let create_task = tokio::spawn(async move {
            let user = UserCreate {
                email: "test@example.com".to_string(),
                role: Role::Client,
            };
            client.create(user).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.email, "test@example.com");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(1));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_store_fault() {
        let (client, mut receiver) = create_mock_client::<User>(10);

        let get_task = tokio::spawn(async move { client.get(7).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, 7);
        drop(responder);

        assert_eq!(get_task.await.unwrap(), Err(FrameworkError::ActorDropped));
    }

    #[test]
    fn test_recording_publisher_keeps_order() {
        let publisher = RecordingPublisher::default();
        let now = chrono::Utc::now();
        let order = Order {
            id: 1,
            customer_id: Some(1),
            restaurant_id: Some(1),
            rider_id: None,
            items: vec![],
            total: 0.0,
            status: OrderStatus::Cooked,
            created_at: now,
            updated_at: now,
        };
        publisher.publish(Channel::NewCookedOrder, OrderEvent { order: order.clone(), owner_id: None });
        publisher.publish(Channel::OrderUpdate, OrderEvent { order, owner_id: None });

        assert_eq!(publisher.channels(), vec![Channel::NewCookedOrder, Channel::OrderUpdate]);
    }
}
