use tracing::{debug, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Payment, UserId};

/// Client for interacting with the Payment store.
#[derive(Clone)]
pub struct PaymentClient {
    inner: ResourceClient<Payment>,
}

impl_basic_client!(PaymentClient, Payment, payment);

impl PaymentClient {
    #[instrument(skip(self))]
    pub async fn find_payments_by_user(&self, user_id: UserId) -> Result<Vec<Payment>, FrameworkError> {
        debug!("Sending request");
        self.inner.find(move |payment| payment.user_id == user_id).await
    }
}
