//! System orchestration, startup, and shutdown logic.

pub mod delivery_system;
pub mod error;
pub mod tracing;

pub use self::delivery_system::*;
pub use self::error::*;
pub use self::tracing::*;
