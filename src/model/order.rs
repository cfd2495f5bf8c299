use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;
use std::str::FromStr;

/// A delivery order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for the create, update
/// and delete rules, including the [`OrderStatus`] checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    /// Stored as sent on create, whatever its JSON type; always one of the
    /// [`OrderStatus`] strings after an update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    pub dishes: Vec<LineItem>,
}

impl Order {
    /// The status, if it is a string.
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().and_then(Value::as_str)
    }

    pub fn is_pending(&self) -> bool {
        self.status() == Some(OrderStatus::Pending.as_str())
    }
}

/// One entry of an order's `dishes`.
///
/// Only `quantity` is interpreted. Everything else the client sent with the line
/// (`dishId`, or a copy of the dish's fields) is carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl LineItem {
    /// Accepts a JSON object whose `quantity` is an integer greater than zero.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let quantity = crate::validation::positive_integer(object.get("quantity"))?;
        let mut details = object.clone();
        details.remove("quantity");
        Some(Self { quantity, details })
    }
}

/// Body of an order create or update request (`{"data": {...}}`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub id: Option<Value>,
    pub deliver_to: Option<Value>,
    pub mobile_number: Option<Value>,
    pub status: Option<Value>,
    pub dishes: Option<Value>,
}

impl OrderPayload {
    /// Builds a payload from typed values. `dishes` is passed through as given.
    pub fn new(
        deliver_to: impl Into<String>,
        mobile_number: impl Into<String>,
        status: Option<OrderStatus>,
        dishes: Value,
    ) -> Self {
        Self {
            id: None,
            deliver_to: Some(Value::String(deliver_to.into())),
            mobile_number: Some(Value::String(mobile_number.into())),
            status: status.map(|s| Value::String(s.to_string())),
            dishes: Some(dishes),
        }
    }

    /// Sets the body id carried by an update.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(Value::String(id.into()));
        self
    }
}

/// The statuses an order may be updated to (`delivered` excepted, see the order rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
