//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a resource's
//! [`Store`] and processes requests against it one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ActorResult, ResourceRequest};
use crate::store::Store;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the store and the receiver
/// end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially*. A request's mutation is complete
/// before the next request is even read from the channel, so the store needs no
/// `Mutex` or `RwLock`.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new(buffer_size, next_id)` returns the actor and its client.
/// 2.  **Seed** (optional): `actor.with_records(records)` preloads the store.
/// 3.  **Run**: spawn `actor.run(context)` in a background task.
///
/// ```rust
/// use actor_framework::{ids, ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: String, label: String }
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = String; type Create = String; type Update = String;
///     type Context = (); type Error = TagError;
///     fn id(&self) -> &String { &self.id }
///     fn from_create_params(id: String, label: String) -> Result<Self, TagError> {
///         Ok(Self { id, label })
///     }
///     async fn on_update(&mut self, label: String, _: &()) -> Result<(), TagError> {
///         self.label = label;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10, ids::sequential("tag"));
///     tokio::spawn(actor.run(()));
///
///     let tag = client.create("rust".to_string()).await.unwrap();
///     assert_eq!(tag.id, "tag_1");
/// }
/// ```
///
/// # Operations
///
/// * **List**: returns a snapshot of every record in insertion order.
/// * **Create**: generates an id, builds the entity (`from_create_params`), runs `on_create`,
///   appends it and returns the new record.
/// * **Get**: returns a clone of the record, or `None`.
/// * **Update**: resolves the record (`NotFound` otherwise), runs `on_update`, returns the
///   updated record.
/// * **Delete**: resolves the record (`NotFound` otherwise), runs `on_delete`, removes it.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Store<T>,
    next_id: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel; callers wait when it is full.
    /// * `next_id` - the id generator used for every created record.
    pub fn new(
        buffer_size: usize,
        next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Store::new(),
            next_id: Box::new(next_id),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Replaces the store's contents with `records`, in order.
    pub fn with_records(mut self, records: Vec<T>) -> Self {
        self.store = Store::from_records(records);
        self
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name ("Dish" rather than "grubdash::model::dish::Dish")
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.all().to_vec()));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.find(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete rejected"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, context: &T::Context) -> ActorResult<T, T> {
        let id = (self.next_id)();
        let mut item = T::from_create_params(id, params).map_err(FrameworkError::Entity)?;
        item.on_create(context)
            .await
            .map_err(FrameworkError::Entity)?;
        self.store.append(item.clone());
        Ok(item)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> ActorResult<T, T> {
        let item = self
            .store
            .find_mut(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_update(update, context)
            .await
            .map_err(FrameworkError::Entity)?;
        Ok(item.clone())
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> ActorResult<T, ()> {
        let item = self
            .store
            .find(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete(context)
            .await
            .map_err(FrameworkError::Entity)?;
        self.store.remove(id);
        Ok(())
    }
}
