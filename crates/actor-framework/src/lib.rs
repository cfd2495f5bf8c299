//! # Actor Framework
//!
//! Building blocks for managing in-memory resources behind actors. It implements a
//! **Resource-Oriented Architecture (ROA)** pattern on top of the **Actor Model**: each
//! resource type gets one actor that exclusively owns an ordered store of records and serves
//! a uniform set of operations (list, create, read, update, delete).
//!
//! ## Why ROA + Actor Model?
//!
//! - **Uniform surface**: every resource answers the same requests, so the message loop,
//!   the client and the test doubles are written once.
//! - **Isolated state**: a store is owned by exactly one task. Requests are handled one at a
//!   time, so a mutation always completes before the next request is looked at, without locks.
//! - **Rules stay with the resource**: validation lives in the entity's hooks
//!   ([`ActorEntity::from_create_params`], [`ActorEntity::on_update`],
//!   [`ActorEntity::on_delete`]) and its typed error travels back to the caller intact.
//!
//! ## Core Components
//!
//! - [`ActorEntity`]: the trait a resource implements (ids, payloads, hooks, error type).
//! - [`Store`]: the ordered, `Vec`-backed collection an actor owns.
//! - [`ResourceActor`]: the server loop. Receives its id generator at construction.
//! - [`ResourceClient`]: the cloneable async handle.
//! - [`ActorClient`]: shared `list`/`get`/`delete` for resource-specific clients.
//! - [`ids`]: id generators (`sequential` for tests, `random_hex` for production).
//! - [`mock`]: `MockClient` for testing code around a client without an actor.
//!
//! ## Wiring
//!
//! ```rust
//! use actor_framework::{ids, ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Tag { id: String, label: String }
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! #[async_trait]
//! impl ActorEntity for Tag {
//!     type Id = String; type Create = String; type Update = String;
//!     type Context = (); type Error = TagError;
//!     fn id(&self) -> &String { &self.id }
//!     fn from_create_params(id: String, label: String) -> Result<Self, TagError> {
//!         Ok(Self { id, label })
//!     }
//!     async fn on_update(&mut self, label: String, _: &()) -> Result<(), TagError> {
//!         self.label = label;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Tag>::new(32, ids::random_hex);
//!     let handle = tokio::spawn(actor.run(()));
//!
//!     client.create("rust".to_string()).await.unwrap();
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//!
//!     // Dropping every client closes the channel and ends the loop.
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod ids;
pub mod message;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ActorResult, ResourceRequest, Response};
pub use store::Store;
