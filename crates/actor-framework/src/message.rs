//! # Generic Messages
//!
//! The request type sent from a `ResourceClient` to its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// The result every request resolves to.
pub type ActorResult<T, R> = Result<R, FrameworkError<<T as ActorEntity>::Error>>;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T, R> = oneshot::Sender<ActorResult<T, R>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map one-to-one onto the resource operations: `List` and `Get` read,
/// `Create`, `Update` and `Delete` mutate. The associated types of [`ActorEntity`]
/// keep the payloads type-safe, so a dish payload can never reach the order actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<T, Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T, T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T, Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T, T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T, ()>,
    },
}
