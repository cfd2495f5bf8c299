use crate::dish_actor::DishError;
use crate::error::ErrorKind;
use crate::order_actor::OrderError;
use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with. Rendered as `{"error": message}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Dish(#[from] DishError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: Method, path: String },

    #[error("Path not found: {0}")]
    PathNotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        let kind = match self {
            ApiError::Dish(e) => e.kind(),
            ApiError::Order(e) => e.kind(),
            ApiError::MalformedPayload(_) => ErrorKind::BadRequest,
            ApiError::MethodNotAllowed { .. } => return StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PathNotFound(_) => ErrorKind::NotFound,
        };
        StatusCode::from_u16(kind.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
