//! In-process publish/subscribe for order changes.

pub mod bus;
pub mod router;

pub use bus::*;
pub use router::SubscriptionRouter;
