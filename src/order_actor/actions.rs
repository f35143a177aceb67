use crate::domain::{Order, OrderStatus, UserId};

/// Custom actions for Order entities.
///
/// Both are check-then-write operations, so they run inside the order store
/// rather than as a read followed by an update.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to a later status.
    AdvanceStatus(OrderStatus),
    /// Fills the empty rider slot.
    AssignRider(UserId),
}

/// Results from OrderActions.
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    StatusAdvanced(Order),
    /// The requested status is not later than the current one.
    StatusNotForward { current: OrderStatus },
    RiderAssigned(Order),
    RiderAlreadyAssigned { rider_id: UserId },
}
