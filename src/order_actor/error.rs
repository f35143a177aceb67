use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Business-rule variants carry fixed messages so callers can tell them
/// apart; `OperationFailed` carries an operation-level generic message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Restaurant not found")]
    RestaurantNotFound,
    #[error("Dish not found")]
    DishNotFound,
    #[error("Order not found")]
    OrderNotFound,
    #[error("Not authorized")]
    NotAuthorized,
    #[error("Invalid status")]
    InvalidStatus,
    #[error("Order already has a rider")]
    RiderAlreadyAssigned,
    #[error("{0}")]
    OperationFailed(&'static str),
}
