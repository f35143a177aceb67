//! Order storage and the order-level error taxonomy.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
