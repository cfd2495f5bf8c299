//! Error types for the Order actor.

use crate::error::ErrorKind;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order id does not exist: {0}")]
    NotFound(String),

    /// A required field is missing or empty.
    #[error("Order must include a {0}")]
    MissingField(&'static str),

    /// `dishes` is empty or not a list.
    #[error("Order must include at least one dish")]
    NoDishes,

    /// The line item at this index has no usable quantity.
    #[error("dish {0} must have a quantity that is an integer greater than 0")]
    InvalidQuantity(usize),

    /// The update body names a different order than the route.
    #[error("Order id does not match route id. Order: {body}, Route: {route}.")]
    IdMismatch { body: String, route: String },

    #[error("A delivered order cannot be changed")]
    Delivered,

    /// The update status is missing or not a known status.
    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,

    #[error("An order cannot be deleted unless it is pending")]
    NotPending,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::NotFound(_) => ErrorKind::NotFound,
            OrderError::ActorCommunicationError(_) => ErrorKind::Internal,
            _ => ErrorKind::BadRequest,
        }
    }
}
