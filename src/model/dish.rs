use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Dish`](#impl-ActorEntity-for-Dish) for the create and update
/// rules. Dishes are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

/// Body of a create or update request (`{"data": {...}}`).
///
/// Every field is kept as raw JSON; the dish rules decide what is acceptable.
/// `id` is only consulted on update, where it must match the route id when present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DishPayload {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub image_url: Option<Value>,
}

impl DishPayload {
    /// Builds a well-formed payload, mostly useful to callers that already hold typed values.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: Some(Value::String(name.into())),
            description: Some(Value::String(description.into())),
            price: Some(Value::from(price)),
            image_url: Some(Value::String(image_url.into())),
        }
    }

    /// Sets the body id carried by an update.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(Value::String(id.into()));
        self
    }
}
