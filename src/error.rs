//! Error classification shared by the resource errors.

/// The two request-scoped failure kinds, plus the case where an actor cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The id does not exist for the requested resource.
    NotFound,
    /// Missing or invalid field, id mismatch, forbidden status change or delete.
    BadRequest,
    /// The owning actor is gone.
    Internal,
}

impl ErrorKind {
    /// The HTTP status equivalent.
    pub fn status(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::BadRequest => 400,
            ErrorKind::Internal => 500,
        }
    }
}
