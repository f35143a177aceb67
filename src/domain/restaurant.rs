use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

pub type RestaurantId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub category_name: String,
    pub owner_id: UserId,
    pub is_promoted: bool,
    pub promoted_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub address: String,
    pub category_name: String,
    pub owner_id: UserId,
}
