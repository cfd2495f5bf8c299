//! Request handlers. Each one parses the `{"data": ...}` envelope, calls a client and wraps
//! the result; the rules themselves run inside the actors.

use super::{ApiError, AppState, Data};
use crate::model::{Dish, DishPayload, Order, OrderPayload};
use actor_framework::ActorClient;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};

type JsonResult<T> = Result<Json<Data<T>>, ApiError>;
type Created<T> = Result<(StatusCode, Json<Data<T>>), ApiError>;

#[derive(Deserialize)]
struct RequestBody<T> {
    data: Option<T>,
}

/// An empty body, a missing `data` key and `"data": null` all read as an empty payload.
fn payload<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let body: RequestBody<T> =
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedPayload(e.to_string()))?;
    Ok(body.data.unwrap_or_default())
}

pub async fn list_dishes(State(state): State<AppState>) -> JsonResult<Vec<Dish>> {
    Ok(Json(Data::new(state.dishes.list().await?)))
}

pub async fn create_dish(State(state): State<AppState>, body: Bytes) -> Created<Dish> {
    let dish = state.dishes.create_dish(payload::<DishPayload>(&body)?).await?;
    Ok((StatusCode::CREATED, Json(Data::new(dish))))
}

pub async fn read_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> JsonResult<Dish> {
    Ok(Json(Data::new(state.dishes.read_dish(dish_id).await?)))
}

pub async fn update_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    body: Bytes,
) -> JsonResult<Dish> {
    let update = payload::<DishPayload>(&body)?;
    Ok(Json(Data::new(state.dishes.update_dish(dish_id, update).await?)))
}

pub async fn list_orders(State(state): State<AppState>) -> JsonResult<Vec<Order>> {
    Ok(Json(Data::new(state.orders.list().await?)))
}

pub async fn create_order(State(state): State<AppState>, body: Bytes) -> Created<Order> {
    let order = state.orders.create_order(payload::<OrderPayload>(&body)?).await?;
    Ok((StatusCode::CREATED, Json(Data::new(order))))
}

pub async fn read_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> JsonResult<Order> {
    Ok(Json(Data::new(state.orders.read_order(order_id).await?)))
}

pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    body: Bytes,
) -> JsonResult<Order> {
    let update = payload::<OrderPayload>(&body)?;
    Ok(Json(Data::new(state.orders.update_order(order_id, update).await?)))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.orders.delete_order(order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::PathNotFound(uri.path().to_string())
}
