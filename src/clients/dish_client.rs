use crate::dish_actor::DishError;
use crate::model::{Dish, DishPayload};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Dish actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, payload))]
    pub async fn create_dish(&self, payload: DishPayload) -> Result<Dish, DishError> {
        debug!(?payload, "Sending request");
        self.inner.create(payload).await.map_err(Self::map_error)
    }

    /// Like [`ActorClient::get`], but an unknown id is an error.
    #[instrument(skip(self))]
    pub async fn read_dish(&self, id: String) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.get(id.clone()).await?.ok_or(DishError::NotFound(id))
    }

    #[instrument(skip(self, payload))]
    pub async fn update_dish(&self, id: String, payload: DishPayload) -> Result<Dish, DishError> {
        debug!(?payload, "Sending request");
        self.inner.update(id, payload).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = DishError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError<DishError>) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => DishError::NotFound(id),
            FrameworkError::Entity(e) => e,
            other => DishError::ActorCommunicationError(other.to_string()),
        }
    }
}
