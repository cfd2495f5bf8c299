//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (Dish, Order, …) implements to be
//! managed by the generic `ResourceActor`. It names the identifier, the create and update
//! payloads, the injected context and the per-resource error type, and exposes the lifecycle
//! hooks (`on_create`, `on_update`, `on_delete`) where the resource's rules live.
//!
//! # Where validation happens
//! The actor resolves the record first and only then calls into the entity. A hook therefore
//! always sees an existing record and can assume the "does it exist?" question has been
//! answered. Hooks must leave the record untouched when they return an error.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks.
/// The `Context` type is injected into every hook when the actor starts running, so
/// dependencies can be wired after construction ("Late Binding").
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The payload used to create a new instance.
    type Create: Send + Sync + Debug;

    /// The payload used to replace the mutable fields of an existing instance.
    type Update: Send + Sync + Debug;

    /// Dependencies injected into the hooks. Use `()` if none are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per resource. It travels back to the caller unchanged inside
    /// [`FrameworkError::Entity`](crate::FrameworkError::Entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this record.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from a freshly generated ID and the create payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is appended to the store.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request reaches an existing record.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. An error keeps the record.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
