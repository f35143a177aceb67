use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use super::SystemError;
use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::clients::{DishClient, OrderClient, PaymentClient, RestaurantClient, UserClient};
use crate::config::Config;
use crate::domain::{Dish, Order, Payment, Restaurant, User};
use crate::events::{EventBus, SubscriptionRouter};
use crate::orders::OrderService;
use crate::payments::PaymentService;

/// The running marketplace core: one store actor per entity type, the event
/// bus, and the services wired on top of them.
///
/// Stores stop once every client handle is gone, so [`shutdown`](Self::shutdown)
/// consumes the whole system.
pub struct DeliverySystem {
    pub user_client: UserClient,
    pub restaurant_client: RestaurantClient,
    pub dish_client: DishClient,
    pub order_client: OrderClient,
    pub payment_client: PaymentClient,
    pub orders: OrderService,
    pub payments: PaymentService,
    pub subscriptions: SubscriptionRouter,
    handles: Vec<JoinHandle<()>>,
}

impl DeliverySystem {
    pub fn new(config: &Config) -> Self {
        let buffer = config.mailbox_size;

        let (user_actor, users) = ResourceActor::<User>::new("users", buffer, sequential_ids());
        let (restaurant_actor, restaurants) = ResourceActor::<Restaurant>::new("restaurants", buffer, sequential_ids());
        let (dish_actor, dishes) = ResourceActor::<Dish>::new("dishes", buffer, sequential_ids());
        let (order_actor, orders) = ResourceActor::<Order>::new("orders", buffer, sequential_ids());
        let (payment_actor, payments) = ResourceActor::<Payment>::new("payments", buffer, sequential_ids());

        let handles = vec![
            tokio::spawn(user_actor.run()),
            tokio::spawn(restaurant_actor.run()),
            tokio::spawn(dish_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(payment_actor.run()),
        ];

        let user_client = UserClient::new(users);
        let restaurant_client = RestaurantClient::new(restaurants);
        let dish_client = DishClient::new(dishes);
        let order_client = OrderClient::new(orders);
        let payment_client = PaymentClient::new(payments);

        let bus = EventBus::new(config.event_capacity);
        let orders = OrderService::new(
            order_client.clone(),
            restaurant_client.clone(),
            dish_client.clone(),
            Arc::new(bus.clone()),
        );
        let payments = PaymentService::new(payment_client.clone(), restaurant_client.clone(), config.promotion_days);
        let subscriptions = SubscriptionRouter::new(bus);

        info!(
            mailbox_size = config.mailbox_size,
            event_capacity = config.event_capacity,
            "Delivery system started"
        );

        Self {
            user_client,
            restaurant_client,
            dish_client,
            order_client,
            payment_client,
            orders,
            payments,
            subscriptions,
            handles,
        }
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // Stores only stop once every client clone is gone, services included.
        let Self {
            user_client,
            restaurant_client,
            dish_client,
            order_client,
            payment_client,
            orders,
            payments,
            subscriptions,
            handles,
        } = self;
        drop((orders, payments, subscriptions));
        drop((user_client, restaurant_client, dish_client, order_client, payment_client));

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
