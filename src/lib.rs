//! # GrubDash
//!
//! > **A food delivery API: a menu of dishes and the orders placed against it.**
//!
//! Every resource is owned by one actor built from the generic
//! [`actor_framework`] crate. The actor keeps the records in insertion order and handles one
//! request at a time, so a create, update or delete always finishes before the next request
//! is looked at. The HTTP layer only translates between JSON and client calls.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Rules ([`dish_actor`], [`order_actor`], [`validation`])
//! Each resource implements [`ActorEntity`](actor_framework::ActorEntity). Validation runs
//! inside the entity hooks as a chain of `?` checks in a fixed order, and only the first
//! failure is reported.
//! - **Dishes**: four required fields and a positive integer price. No delete.
//! - **Orders**: address, phone and line items, plus a status rule on update and a
//!   pending-only delete.
//!
//! ### 2. The Interface ([`clients`])
//! [`DishClient`](clients::DishClient) and [`OrderClient`](clients::OrderClient) wrap the
//! generic `ResourceClient` and return [`DishError`](dish_actor::DishError) /
//! [`OrderError`](order_actor::OrderError). Each error knows its [`ErrorKind`](error::ErrorKind):
//! Not-Found or Bad-Request, or Internal when an actor is unreachable.
//!
//! ### 3. The Orchestrator ([`lifecycle`], [`config`])
//! [`DeliverySystem`](lifecycle::DeliverySystem) starts both actors, optionally seeded from
//! JSON files named in the environment, and shuts them down.
//!
//! ### 4. The Surface ([`http`])
//! An `axum` router exposing `/dishes` and `/orders`.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Serve on the default port 5000 with info logs
//! RUST_LOG=info cargo run
//!
//! # Seed the menu and pick a port
//! PORT=8080 DISHES_DATA=data/dishes.json RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod dish_actor;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod validation;
