//! Order lifecycle and role-based authorization core for a food-delivery
//! marketplace.
//!
//! Entities live in actor-backed stores ([`actor_framework`]) reached through
//! typed [`clients`]. The [`orders`] and [`payments`] services sit on top,
//! publish order changes on the [`events`] bus, and return
//! [`CoreOutput`](output::CoreOutput) values. [`app_system::DeliverySystem`]
//! wires everything together.

pub mod actor_framework;
pub mod app_system;
pub mod auth;
pub mod clients;
pub mod config;
pub mod dish_actor;
pub mod domain;
pub mod events;
pub mod order_actor;
pub mod orders;
pub mod output;
pub mod payment_actor;
pub mod payments;
pub mod restaurant_actor;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
