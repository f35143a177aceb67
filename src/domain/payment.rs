use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RestaurantId, UserId};

pub type PaymentId = u64;

/// A promotional payment made by a restaurant owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub transaction_id: String,
    pub user_id: UserId,
    pub restaurant_id: RestaurantId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PaymentCreate {
    pub transaction_id: String,
    pub user_id: UserId,
    pub restaurant_id: RestaurantId,
}
