//! Entity trait implementation for the Order domain type.
//!
//! Create and update share the field checks: `deliverTo`, `mobileNumber` and `dishes`
//! present (in that order), `dishes` a non-empty list, then every line item carrying a
//! positive integer `quantity`. Update adds the body id check in front and the status rule
//! at the end. Delete only checks that the order is still pending.

use super::OrderError;
use crate::model::{LineItem, Order, OrderPayload, OrderStatus};
use crate::validation;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use serde_json::Value;

struct OrderFields {
    deliver_to: String,
    mobile_number: String,
    dishes: Vec<LineItem>,
}

impl OrderFields {
    fn validate(payload: &OrderPayload) -> Result<Self, OrderError> {
        let deliver_to = required(&payload.deliver_to, "deliverTo")?;
        let mobile_number = required(&payload.mobile_number, "mobileNumber")?;
        if !validation::is_truthy(payload.dishes.as_ref()) {
            return Err(OrderError::MissingField("dishes"));
        }
        let dishes = line_items(payload.dishes.as_ref())?;

        Ok(Self {
            deliver_to,
            mobile_number,
            dishes,
        })
    }
}

fn required(value: &Option<Value>, field: &'static str) -> Result<String, OrderError> {
    validation::non_empty_string(value.as_ref()).ok_or(OrderError::MissingField(field))
}

/// Parses the line items, reporting the first one without a usable quantity.
fn line_items(dishes: Option<&Value>) -> Result<Vec<LineItem>, OrderError> {
    let items = match dishes.and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items,
        _ => return Err(OrderError::NoDishes),
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| LineItem::from_value(item).ok_or(OrderError::InvalidQuantity(index)))
        .collect()
}

/// The update-time status rule. `delivered` is refused outright, whatever the current status.
fn update_status(status: Option<&Value>) -> Result<OrderStatus, OrderError> {
    let status = status
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<OrderStatus>().ok())
        .ok_or(OrderError::InvalidStatus)?;
    match status {
        OrderStatus::Delivered => Err(OrderError::Delivered),
        allowed => Ok(allowed),
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type Create = OrderPayload;
    type Update = OrderPayload;
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> &String {
        &self.id
    }

    /// The status is stored as sent, without a default. Only `null` counts as absent.
    fn from_create_params(id: String, params: OrderPayload) -> Result<Self, OrderError> {
        let fields = OrderFields::validate(&params)?;
        Ok(Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: params.status.filter(|status| !status.is_null()),
            dishes: fields.dishes,
        })
    }

    async fn on_update(&mut self, update: OrderPayload, _ctx: &()) -> Result<(), OrderError> {
        validation::matching_body_id(update.id.as_ref(), &self.id).map_err(|body| {
            OrderError::IdMismatch {
                body,
                route: self.id.clone(),
            }
        })?;
        let fields = OrderFields::validate(&update)?;
        let status = update_status(update.status.as_ref())?;

        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        self.status = Some(Value::String(status.to_string()));
        self.dishes = fields.dishes;
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), OrderError> {
        if self.is_pending() {
            Ok(())
        } else {
            Err(OrderError::NotPending)
        }
    }
}
