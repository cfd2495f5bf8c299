use crate::clients::{DishClient, OrderClient};
use crate::config::{load_records, Config, ConfigError};
use crate::http::AppState;
use crate::model::{Dish, Order};
use actor_framework::ids;
use tracing::{error, info};

/// Owns the running actors of the delivery service.
///
/// `DeliverySystem` is responsible for:
/// - **Lifecycle Management**: starting the Dish and Order actors and stopping them again
/// - **Seeding**: loading the initial menu and orders before any request is served
///
/// The two actors are independent; an order's line items are not checked against the menu.
///
/// # Example
///
/// ```rust
/// use grubdash::lifecycle::DeliverySystem;
/// use actor_framework::ActorClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = DeliverySystem::new();
///     assert!(system.order_client.list().await.map_err(|e| e.to_string())?.is_empty());
///     system.shutdown().await
/// }
/// ```
pub struct DeliverySystem {
    /// Client for interacting with the Dish actor
    pub dish_client: DishClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for DeliverySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliverySystem {
    /// Starts both actors with empty stores. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_seed(Vec::new(), Vec::new())
    }

    /// Starts both actors with pre-existing records. New records get random hex ids.
    pub fn with_seed(dishes: Vec<Dish>, orders: Vec<Order>) -> Self {
        let (dish_actor, dish_client) = crate::dish_actor::new(ids::random_hex);
        let (order_actor, order_client) = crate::order_actor::new(ids::random_hex);

        let dish_handle = tokio::spawn(dish_actor.with_records(dishes).run(()));
        let order_handle = tokio::spawn(order_actor.with_records(orders).run(()));

        Self {
            dish_client,
            order_client,
            handles: vec![dish_handle, order_handle],
        }
    }

    /// Starts the system with the seed files named in `config`, if any.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let dishes = match &config.dishes_data {
            Some(path) => load_records(path)?,
            None => Vec::new(),
        };
        let orders = match &config.orders_data {
            Some(path) => load_records(path)?,
            None => Vec::new(),
        };
        Ok(Self::with_seed(dishes, orders))
    }

    /// Shared state for the HTTP handlers. Holds client clones, which must be dropped
    /// before [`shutdown`](Self::shutdown) can complete.
    pub fn state(&self) -> AppState {
        AppState {
            dishes: self.dish_client.clone(),
            orders: self.order_client.clone(),
        }
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the channels; each actor drains what is left and exits.
    /// Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.dish_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
