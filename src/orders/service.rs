use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use super::authorization::is_party;
use super::dtos::*;
use super::pricing::{self, PricingError};
use super::state_machine;
use crate::actor_framework::FrameworkError;
use crate::auth::{guard, RoleGuard};
use crate::clients::{DishClient, OrderClient, RestaurantClient};
use crate::domain::{Order, OrderCreate, OrderItem, OrderStatus, Restaurant, Role, User};
use crate::events::{Channel, OrderEvent, Publisher};
use crate::order_actor::{OrderActionResult, OrderError};
use crate::output::CoreOutput;

const CREATE_FAILED: &str = "Could not create the order";
const LIST_FAILED: &str = "Could not get the orders";
const GET_FAILED: &str = "Could not get the order";
const EDIT_FAILED: &str = "Could not edit the order";
const TAKE_FAILED: &str = "Could not take the order";

/// Logs a store fault and replaces it with the operation's generic failure.
fn store_fault(context: &'static str) -> impl FnOnce(FrameworkError) -> OrderError {
    move |fault| {
        error!(error = %fault, "Store request failed");
        OrderError::OperationFailed(context)
    }
}

fn finish<T>(result: Result<T, OrderError>) -> CoreOutput<T> {
    match &result {
        // store faults are logged where they are caught
        Ok(_) | Err(OrderError::OperationFailed(_)) => {}
        Err(rejection) => warn!(error = %rejection, "Request rejected"),
    }
    result.into()
}

/// Orchestrates the order lifecycle.
///
/// Every public operation is total: business-rule violations come back as
/// their own message, store faults as an operation-level generic message.
/// Nothing is retried.
#[derive(Clone)]
pub struct OrderService {
    orders: OrderClient,
    restaurants: RestaurantClient,
    dishes: DishClient,
    publisher: Arc<dyn Publisher>,
}

impl OrderService {
    pub fn new(
        orders: OrderClient,
        restaurants: RestaurantClient,
        dishes: DishClient,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            orders,
            restaurants,
            dishes,
            publisher,
        }
    }

    #[instrument(
        skip(self, customer, input),
        fields(user_id = customer.id, restaurant_id = input.restaurant_id, items = input.items.len())
    )]
    pub async fn create_order(&self, customer: &User, input: CreateOrderInput) -> CreateOrderOutput {
        finish(self.try_create_order(customer, input).await)
    }

    #[instrument(skip(self, user), fields(user_id = user.id, role = ?user.role))]
    pub async fn list_orders(&self, user: &User, input: GetOrdersInput) -> GetOrdersOutput {
        finish(self.try_list_orders(user, input).await)
    }

    #[instrument(skip(self, user), fields(user_id = user.id, role = ?user.role))]
    pub async fn get_order(&self, user: &User, input: GetOrderInput) -> GetOrderOutput {
        finish(self.try_get_order(user, input).await)
    }

    #[instrument(skip(self, user), fields(user_id = user.id, role = ?user.role))]
    pub async fn edit_order_status(&self, user: &User, input: EditOrderInput) -> EditOrderOutput {
        finish(self.try_edit_order_status(user, input).await)
    }

    #[instrument(skip(self, rider), fields(user_id = rider.id))]
    pub async fn assign_rider(&self, rider: &User, input: TakeOrderInput) -> TakeOrderOutput {
        finish(self.try_assign_rider(rider, input).await)
    }

    async fn try_create_order(&self, customer: &User, input: CreateOrderInput) -> Result<(), OrderError> {
        guard(customer, RoleGuard::Only(&[Role::Client]), OrderError::NotAuthorized)?;

        let restaurant = self
            .restaurants
            .get_restaurant(input.restaurant_id)
            .await
            .map_err(store_fault(CREATE_FAILED))?
            .ok_or(OrderError::RestaurantNotFound)?;

        let mut menu = BTreeMap::new();
        for item in &input.items {
            if menu.contains_key(&item.dish_id) {
                continue;
            }
            let dish = self
                .dishes
                .get_dish(item.dish_id)
                .await
                .map_err(store_fault(CREATE_FAILED))?
                .ok_or(OrderError::DishNotFound)?;
            menu.insert(dish.id, dish);
        }

        let items: Vec<OrderItem> = input
            .items
            .into_iter()
            .map(|item| OrderItem {
                dish_id: item.dish_id,
                options: item.options,
            })
            .collect();
        let total = pricing::compute_total(|id| menu.get(&id), &items)
            .map_err(|PricingError::ItemNotFound(_)| OrderError::DishNotFound)?;

        let order_id = self
            .orders
            .create_order(OrderCreate {
                customer_id: customer.id,
                restaurant_id: restaurant.id,
                items,
                total,
            })
            .await
            .map_err(store_fault(CREATE_FAILED))?;
        let order = self
            .orders
            .get_order(order_id)
            .await
            .map_err(store_fault(CREATE_FAILED))?
            .ok_or(OrderError::OperationFailed(CREATE_FAILED))?;

        info!(order_id, total, "Order created");
        self.publisher.publish(
            Channel::NewPendingOrder,
            OrderEvent {
                order,
                owner_id: Some(restaurant.owner_id),
            },
        );
        Ok(())
    }

    async fn try_list_orders(&self, user: &User, input: GetOrdersInput) -> Result<OrdersPayload, OrderError> {
        guard(user, RoleGuard::Any, OrderError::NotAuthorized)?;

        let status = input.status;
        let orders = match user.role {
            Role::Client => self.orders.find_orders_by_customer(user.id, status).await,
            Role::Delivery => self.orders.find_orders_by_rider(user.id, status).await,
            Role::Owner => {
                let restaurant_ids: Vec<_> = self
                    .restaurants
                    .find_restaurants_by_owner(user.id)
                    .await
                    .map_err(store_fault(LIST_FAILED))?
                    .iter()
                    .map(|restaurant| restaurant.id)
                    .collect();
                if restaurant_ids.is_empty() {
                    Ok(Vec::new())
                } else {
                    self.orders.find_orders_by_restaurants(restaurant_ids, status).await
                }
            }
        }
        .map_err(store_fault(LIST_FAILED))?;

        info!(count = orders.len(), "Orders listed");
        Ok(OrdersPayload { orders })
    }

    async fn try_get_order(&self, user: &User, input: GetOrderInput) -> Result<OrderPayload, OrderError> {
        guard(user, RoleGuard::Any, OrderError::NotAuthorized)?;

        let order = self.load_order(input.id, GET_FAILED).await?;
        let restaurant = self.load_restaurant(&order, GET_FAILED).await?;
        if !is_party(user, &order, restaurant.as_ref().map(|r| r.owner_id)) {
            return Err(OrderError::NotAuthorized);
        }
        Ok(OrderPayload { order, restaurant })
    }

    async fn try_edit_order_status(&self, user: &User, input: EditOrderInput) -> Result<(), OrderError> {
        guard(user, RoleGuard::Any, OrderError::NotAuthorized)?;
        // Clients never edit status, whether or not the order is theirs.
        if user.role == Role::Client {
            return Err(OrderError::NotAuthorized);
        }

        let order = self.load_order(input.id, EDIT_FAILED).await?;
        let owner_id = self.load_restaurant(&order, EDIT_FAILED).await?.map(|r| r.owner_id);
        if !is_party(user, &order, owner_id) {
            return Err(OrderError::NotAuthorized);
        }
        if !state_machine::can_transition(user.role, input.status) {
            return Err(OrderError::InvalidStatus);
        }

        let updated = match self
            .orders
            .advance_status(order.id, input.status)
            .await
            .map_err(store_fault(EDIT_FAILED))?
        {
            OrderActionResult::StatusAdvanced(updated) => updated,
            OrderActionResult::StatusNotForward { current } => {
                warn!(?current, target = ?input.status, "Status would not move forward");
                return Err(OrderError::InvalidStatus);
            }
            unexpected => {
                error!(?unexpected, "Unexpected store reply");
                return Err(OrderError::OperationFailed(EDIT_FAILED));
            }
        };

        info!(order_id = updated.id, status = ?updated.status, "Order status changed");
        if user.role == Role::Owner && updated.status == OrderStatus::Cooked {
            self.publisher.publish(
                Channel::NewCookedOrder,
                OrderEvent {
                    order: updated.clone(),
                    owner_id,
                },
            );
        }
        self.publisher.publish(Channel::OrderUpdate, OrderEvent { order: updated, owner_id });
        Ok(())
    }

    async fn try_assign_rider(&self, rider: &User, input: TakeOrderInput) -> Result<(), OrderError> {
        guard(rider, RoleGuard::Only(&[Role::Delivery]), OrderError::NotAuthorized)?;

        // The store checks the empty slot and fills it in one step.
        let updated = match self.orders.assign_rider(input.id, rider.id).await {
            Ok(OrderActionResult::RiderAssigned(updated)) => updated,
            Ok(OrderActionResult::RiderAlreadyAssigned { rider_id }) => {
                warn!(order_id = input.id, assigned = rider_id, "Order already taken");
                return Err(OrderError::RiderAlreadyAssigned);
            }
            Ok(unexpected) => {
                error!(?unexpected, "Unexpected store reply");
                return Err(OrderError::OperationFailed(TAKE_FAILED));
            }
            Err(FrameworkError::NotFound(_)) => return Err(OrderError::OrderNotFound),
            Err(fault) => return Err(store_fault(TAKE_FAILED)(fault)),
        };

        info!(order_id = updated.id, "Rider assigned");
        // The rider is stored at this point, so a failed owner lookup only
        // narrows who hears about it.
        let owner_id = match updated.restaurant_id {
            Some(id) => match self.restaurants.get_restaurant(id).await {
                Ok(restaurant) => restaurant.map(|r| r.owner_id),
                Err(fault) => {
                    error!(error = %fault, order_id = updated.id, "Owner lookup failed, publishing without owner");
                    None
                }
            },
            None => None,
        };
        self.publisher.publish(Channel::OrderUpdate, OrderEvent { order: updated, owner_id });
        Ok(())
    }

    async fn load_order(&self, id: u64, context: &'static str) -> Result<Order, OrderError> {
        self.orders
            .get_order(id)
            .await
            .map_err(store_fault(context))?
            .ok_or(OrderError::OrderNotFound)
    }

    /// The order's restaurant, or `None` if it has none or it was removed.
    async fn load_restaurant(&self, order: &Order, context: &'static str) -> Result<Option<Restaurant>, OrderError> {
        match order.restaurant_id {
            Some(id) => self.restaurants.get_restaurant(id).await.map_err(store_fault(context)),
            None => Ok(None),
        }
    }
}
