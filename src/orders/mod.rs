//! Order lifecycle: pricing, the status machine, party checks and the
//! service that ties them to the stores and the event bus.

pub mod authorization;
pub mod dtos;
pub mod pricing;
pub mod service;
pub mod state_machine;

pub use dtos::*;
pub use service::OrderService;
