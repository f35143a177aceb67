pub mod user;
pub mod restaurant;
pub mod dish;
pub mod order;
pub mod payment;

pub use user::*;
pub use restaurant::*;
pub use dish::*;
pub use order::*;
pub use payment::*;
