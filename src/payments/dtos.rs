use serde::{Deserialize, Serialize};

use crate::domain::{Payment, RestaurantId};
use crate::output::CoreOutput;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentInput {
    pub restaurant_id: RestaurantId,
    pub transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentsPayload {
    pub payments: Vec<Payment>,
}

pub type CreatePaymentOutput = CoreOutput<()>;
pub type GetPaymentsOutput = CoreOutput<PaymentsPayload>;
