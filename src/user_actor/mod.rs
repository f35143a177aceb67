//! Account storage.

pub mod entity;
