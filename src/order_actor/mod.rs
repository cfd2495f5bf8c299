//! # Order Actor
//!
//! Delivery orders and their status rules. Orders support the full set of operations:
//! list, create, read, update and delete.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and its client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(
    next_id: impl Fn() -> String + Send + Sync + 'static,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32, next_id);
    (actor, OrderClient::new(generic_client))
}
