use tokio_stream::StreamExt;
use tracing::{error, info, Instrument};

use delivery_core::app_system::{setup_tracing, DeliverySystem, SystemError};
use delivery_core::config::Config;
use delivery_core::domain::{DishCreate, DishOption, OrderItemOption, OrderStatus, RestaurantCreate, Role, User, UserCreate};
use delivery_core::orders::{CreateOrderInput, CreateOrderItemInput, EditOrderInput, GetOrderInput, TakeOrderInput};

async fn register(system: &DeliverySystem, email: &str, role: Role) -> Result<User, String> {
    let id = system
        .user_client
        .create_user(UserCreate {
            email: email.to_string(),
            role,
        })
        .await
        .map_err(|e| e.to_string())?;
    system
        .user_client
        .get_user(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("user {id} vanished"))
}

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = Config::load(None)?;
    setup_tracing(&config.log_level);

    info!("Starting delivery core demo");
    let system = DeliverySystem::new(&config);

    if let Err(e) = run_demo(&system).await {
        error!(error = %e, "Demo failed");
    }

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}

async fn run_demo(system: &DeliverySystem) -> Result<(), String> {
    let span = tracing::info_span!("registration");
    let (customer, owner, rider) = async {
        info!("Registering users");
        let customer = register(system, "alice@example.com", Role::Client).await?;
        let owner = register(system, "bob@example.com", Role::Owner).await?;
        let rider = register(system, "carol@example.com", Role::Delivery).await?;
        Ok::<_, String>((customer, owner, rider))
    }
    .instrument(span)
    .await?;

    let restaurant_id = system
        .restaurant_client
        .create_restaurant(RestaurantCreate {
            name: "Bob's Pizza".into(),
            address: "1 Main St".into(),
            category_name: "Pizza".into(),
            owner_id: owner.id,
        })
        .await
        .map_err(|e| e.to_string())?;
    let dish_id = system
        .dish_client
        .create_dish(DishCreate {
            restaurant_id,
            name: "Margherita".into(),
            description: "Tomato, mozzarella, basil".into(),
            price: 20.0,
            options: vec![
                DishOption::new("Size", None).with_choice("L", Some(5.0)).with_choice("M", None),
                DishOption::new("Extra cheese", Some(3.0)),
            ],
        })
        .await
        .map_err(|e| e.to_string())?;

    // Owner dashboard: print new orders as they come in.
    let mut pending = system.subscriptions.pending_orders(&owner).map_err(|e| e.to_string())?;
    let watcher = tokio::spawn(
        async move {
            if let Some(order) = pending.next().await {
                info!(order_id = order.id, total = order.total, "New pending order");
            }
        }
        .instrument(tracing::info_span!("owner_dashboard", user_id = owner.id)),
    );

    let span = tracing::info_span!("order_processing");
    async {
        let input = CreateOrderInput {
            restaurant_id,
            items: vec![CreateOrderItemInput {
                dish_id,
                options: vec![OrderItemOption::with_choice("Size", "L"), OrderItemOption::new("Extra cheese")],
            }],
        };
        let created = system.orders.create_order(&customer, input).await;
        info!(ok = created.ok, "Order placed");

        let listed = system.orders.list_orders(&customer, Default::default()).await;
        let order_id = listed
            .data
            .and_then(|payload| payload.orders.first().map(|order| order.id))
            .ok_or("order was not stored")?;

        for status in [OrderStatus::Cooking, OrderStatus::Cooked] {
            let output = system.orders.edit_order_status(&owner, EditOrderInput { id: order_id, status }).await;
            info!(?status, ok = output.ok, error = ?output.error, "Owner updated order");
        }

        let taken = system.orders.assign_rider(&rider, TakeOrderInput { id: order_id }).await;
        info!(ok = taken.ok, "Rider took order");

        for status in [OrderStatus::PickedUp, OrderStatus::Delivered] {
            let output = system.orders.edit_order_status(&rider, EditOrderInput { id: order_id, status }).await;
            info!(?status, ok = output.ok, error = ?output.error, "Rider updated order");
        }

        let rejected = system
            .orders
            .edit_order_status(&customer, EditOrderInput { id: order_id, status: OrderStatus::Cooking })
            .await;
        info!(error = ?rejected.error, "Customer edit rejected");

        let fetched = system.orders.get_order(&customer, GetOrderInput { id: order_id }).await;
        if let Some(payload) = fetched.data {
            info!(status = ?payload.order.status, total = payload.order.total, "Final order state");
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    if let Err(e) = watcher.await {
        error!(error = %e, "Dashboard task failed");
    }
    Ok(())
}
