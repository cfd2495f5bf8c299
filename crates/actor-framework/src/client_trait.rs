//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `list`, `get`
//! and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the shared operations.
///
/// A resource client only has to expose its inner [`ResourceClient`] and say how framework
/// errors translate into its own error type.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: String }
/// #[derive(Debug, thiserror::Error)]
/// enum TagError {
///     #[error("Tag id does not exist: {0}")] NotFound(String),
///     #[error("Tag actor unavailable: {0}")] Unavailable(String),
/// }
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = String; type Create = (); type Update = ();
///     type Context = (); type Error = TagError;
///     fn id(&self) -> &String { &self.id }
///     fn from_create_params(id: String, _: ()) -> Result<Self, TagError> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), TagError> { Ok(()) }
/// }
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///
///     fn map_error(e: FrameworkError<TagError>) -> TagError {
///         match e {
///             FrameworkError::NotFound(id) => TagError::NotFound(id),
///             FrameworkError::Entity(e) => e,
///             other => TagError::Unavailable(other.to_string()),
///         }
///     }
/// }
///
/// // list(), get() and delete() are provided automatically.
/// async fn usage(client: TagClient) {
///     let _ = client.list().await;
///     let _ = client.get("tag_1".to_string()).await;
///     let _ = client.delete("tag_1".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError<T::Error>) -> Self::Error;

    /// Fetch every record, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
