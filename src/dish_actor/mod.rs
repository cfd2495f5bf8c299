//! # Dish Actor
//!
//! The menu. Dishes can be listed, created, read and updated; there is no delete.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Dish`]
//! - [`error`] - [`DishError`], one variant per rejection
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::{ids, ActorClient};
//! use grubdash::dish_actor;
//! use grubdash::model::DishPayload;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = dish_actor::new(ids::sequential("dish"));
//!     tokio::spawn(actor.run(()));
//!
//!     let payload = DishPayload::new("Falafel", "Chickpea fritters", 9, "https://example.com/f.jpg");
//!     let dish = client.create_dish(payload).await?;
//!     assert_eq!(dish.id, "dish_1");
//!     assert_eq!(client.list().await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::DishClient;
use crate::model::Dish;
use actor_framework::ResourceActor;

/// Creates a new Dish actor and its client.
pub fn new(
    next_id: impl Fn() -> String + Send + Sync + 'static,
) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::new(32, next_id);
    (actor, DishClient::new(generic_client))
}
