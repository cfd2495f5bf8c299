//! Records and request payloads. The records implement
//! [`ActorEntity`](actor_framework::ActorEntity) in their actor modules.

pub mod dish;
pub mod order;

pub use dish::*;
pub use order::*;
