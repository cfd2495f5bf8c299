use crate::model::{Order, OrderPayload};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// The status and delete rules live in the Order entity hooks; this wrapper only
/// forwards requests and types the results.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, payload))]
    pub async fn create_order(&self, payload: OrderPayload) -> Result<Order, OrderError> {
        debug!(?payload, "create_order called");
        self.inner.create(payload).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn read_order(&self, id: String) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.get(id.clone()).await?.ok_or(OrderError::NotFound(id))
    }

    #[instrument(skip(self, payload))]
    pub async fn update_order(
        &self,
        id: String,
        payload: OrderPayload,
    ) -> Result<Order, OrderError> {
        debug!(?payload, "Sending request");
        self.inner.update(id, payload).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: String) -> Result<(), OrderError> {
        debug!("Sending request");
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError<OrderError>) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Entity(e) => e,
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
