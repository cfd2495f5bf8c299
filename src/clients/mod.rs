//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each wrapper inherits `list`, `get` and `delete` from
//! [`ActorClient`](actor_framework::ActorClient) and adds the operations whose results need
//! resource-specific handling, such as turning a missing record into a typed `NotFound`.

pub mod dish_client;
pub mod order_client;

pub use dish_client::*;
pub use order_client::*;
