//! Restaurant storage, including the promotion flag set by payments.

mod actions;
pub mod entity;

pub use actions::*;
