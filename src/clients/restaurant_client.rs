use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Restaurant, RestaurantId, UserId};
use crate::restaurant_actor::RestaurantAction;

/// Client for interacting with the Restaurant store.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl_basic_client!(RestaurantClient, Restaurant, restaurant);

impl RestaurantClient {
    #[instrument(skip(self))]
    pub async fn find_restaurants_by_owner(&self, owner_id: UserId) -> Result<Vec<Restaurant>, FrameworkError> {
        debug!("Sending request");
        self.inner.find(move |restaurant| restaurant.owner_id == owner_id).await
    }

    #[instrument(skip(self))]
    pub async fn promote(&self, id: RestaurantId, until: DateTime<Utc>) -> Result<Restaurant, FrameworkError> {
        debug!("Sending request");
        self.inner.perform_action(id, RestaurantAction::Promote { until }).await
    }
}
