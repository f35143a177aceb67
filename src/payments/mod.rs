//! Promotional payments made by restaurant owners.

pub mod dtos;
pub mod service;

pub use dtos::*;
pub use service::PaymentService;
