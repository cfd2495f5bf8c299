//! Error types for the Dish actor.

use crate::error::ErrorKind;
use thiserror::Error;

/// Errors that can occur during dish operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DishError {
    /// No dish has the requested id.
    #[error("Dish id does not exist: {0}")]
    NotFound(String),

    /// A required field is missing or empty.
    #[error("Dish must include a {0}")]
    MissingField(&'static str),

    #[error("Dish must have a price that is an integer greater than 0")]
    InvalidPrice,

    /// The update body names a different dish than the route.
    #[error("Dish id does not match route id. Dish: {body}, Route: {route}")]
    IdMismatch { body: String, route: String },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl DishError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DishError::NotFound(_) => ErrorKind::NotFound,
            DishError::ActorCommunicationError(_) => ErrorKind::Internal,
            _ => ErrorKind::BadRequest,
        }
    }
}
