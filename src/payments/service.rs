use chrono::{Duration, Utc};
use tracing::{error, info, instrument, warn};

use super::dtos::*;
use crate::actor_framework::FrameworkError;
use crate::auth::{guard, RoleGuard};
use crate::clients::{PaymentClient, RestaurantClient};
use crate::domain::{PaymentCreate, Role, User};
use crate::output::CoreOutput;
use crate::payment_actor::PaymentError;

const CREATE_FAILED: &str = "Could not create the payment";
const LOAD_FAILED: &str = "Could not load the payments";

fn store_fault(context: &'static str) -> impl FnOnce(FrameworkError) -> PaymentError {
    move |fault| {
        error!(error = %fault, "Store request failed");
        PaymentError::OperationFailed(context)
    }
}

fn finish<T>(result: Result<T, PaymentError>) -> CoreOutput<T> {
    match &result {
        // store faults are logged where they are caught
        Ok(_) | Err(PaymentError::OperationFailed(_)) => {}
        Err(rejection) => warn!(error = %rejection, "Payment request rejected"),
    }
    result.into()
}

/// Records promotional payments and promotes the paid-for restaurant.
#[derive(Clone)]
pub struct PaymentService {
    payments: PaymentClient,
    restaurants: RestaurantClient,
    promotion_days: i64,
}

impl PaymentService {
    pub fn new(payments: PaymentClient, restaurants: RestaurantClient, promotion_days: i64) -> Self {
        Self {
            payments,
            restaurants,
            promotion_days,
        }
    }

    #[instrument(skip(self, owner), fields(user_id = owner.id))]
    pub async fn create_payment(&self, owner: &User, input: CreatePaymentInput) -> CreatePaymentOutput {
        finish(self.try_create_payment(owner, input).await)
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn get_payments(&self, user: &User) -> GetPaymentsOutput {
        finish(self.try_get_payments(user).await)
    }

    async fn try_create_payment(&self, owner: &User, input: CreatePaymentInput) -> Result<(), PaymentError> {
        guard(owner, RoleGuard::Only(&[Role::Owner]), PaymentError::NotAuthorized)?;

        let restaurant = self
            .restaurants
            .get_restaurant(input.restaurant_id)
            .await
            .map_err(store_fault(CREATE_FAILED))?
            .ok_or(PaymentError::RestaurantNotFound)?;
        if restaurant.owner_id != owner.id {
            return Err(PaymentError::NotAuthorized);
        }

        let payment_id = self
            .payments
            .create_payment(PaymentCreate {
                transaction_id: input.transaction_id,
                user_id: owner.id,
                restaurant_id: restaurant.id,
            })
            .await
            .map_err(store_fault(CREATE_FAILED))?;

        let until = Utc::now() + Duration::days(self.promotion_days);
        self.restaurants
            .promote(restaurant.id, until)
            .await
            .map_err(store_fault(CREATE_FAILED))?;

        info!(payment_id, restaurant_id = restaurant.id, %until, "Restaurant promoted");
        Ok(())
    }

    async fn try_get_payments(&self, user: &User) -> Result<PaymentsPayload, PaymentError> {
        guard(user, RoleGuard::Any, PaymentError::NotAuthorized)?;
        let payments = self
            .payments
            .find_payments_by_user(user.id)
            .await
            .map_err(store_fault(LOAD_FAILED))?;
        Ok(PaymentsPayload { payments })
    }
}
