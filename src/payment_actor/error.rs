use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    #[error("Restaurant not found")]
    RestaurantNotFound,
    #[error("Not authorized")]
    NotAuthorized,
    #[error("{0}")]
    OperationFailed(&'static str),
}
