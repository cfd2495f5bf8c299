//! # Framework Errors
//!
//! Errors produced by the plumbing between a client and its actor, plus a
//! transparent carrier for the entity's own error type.

/// Errors that can occur while talking to a `ResourceActor`.
///
/// `E` is the entity's error type ([`ActorEntity::Error`](crate::ActorEntity::Error)).
/// Keeping it generic lets resource clients recover the typed validation error
/// instead of a stringified one.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError<E> {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Entity(E),
}
