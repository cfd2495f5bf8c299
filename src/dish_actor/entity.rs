//! Entity trait implementation for the Dish domain type.
//!
//! The create rules run in `from_create_params`; the update rules in `on_update`, after the
//! actor has already confirmed the dish exists. Both run the checks in this order and stop
//! at the first failure:
//!
//! 1. (update only) body `id`, when present, equals the route id
//! 2. `name`, `description`, `price`, `image_url` present
//! 3. `price` is an integer greater than zero

use super::DishError;
use crate::model::{Dish, DishPayload};
use crate::validation;
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// The four mutable fields, validated.
struct DishFields {
    name: String,
    description: String,
    price: u64,
    image_url: String,
}

impl DishFields {
    fn validate(payload: &DishPayload) -> Result<Self, DishError> {
        let name = required(&payload.name, "name")?;
        let description = required(&payload.description, "description")?;
        if !validation::is_present(payload.price.as_ref()) {
            return Err(DishError::MissingField("price"));
        }
        let image_url = required(&payload.image_url, "image_url")?;
        let price =
            validation::positive_integer(payload.price.as_ref()).ok_or(DishError::InvalidPrice)?;

        Ok(Self {
            name,
            description,
            price,
            image_url,
        })
    }
}

fn required(value: &Option<serde_json::Value>, field: &'static str) -> Result<String, DishError> {
    validation::non_empty_string(value.as_ref()).ok_or(DishError::MissingField(field))
}

#[async_trait]
impl ActorEntity for Dish {
    type Id = String;
    type Create = DishPayload;
    type Update = DishPayload;
    type Context = ();
    type Error = DishError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: DishPayload) -> Result<Self, DishError> {
        let fields = DishFields::validate(&params)?;
        Ok(Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        })
    }

    /// Overwrites all four fields. The id never changes.
    async fn on_update(&mut self, update: DishPayload, _ctx: &()) -> Result<(), DishError> {
        validation::matching_body_id(update.id.as_ref(), &self.id).map_err(|body| {
            DishError::IdMismatch {
                body,
                route: self.id.clone(),
            }
        })?;
        let fields = DishFields::validate(&update)?;

        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn payload() -> DishPayload {
        DishPayload::new(
            "Dolcelatte and chickpea spaghetti",
            "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
            19,
            "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg",
        )
    }

    fn dish() -> Dish {
        Dish::from_create_params("d1".to_string(), payload()).unwrap()
    }

    #[test]
    fn test_create_copies_fields() {
        let dish = dish();
        assert_eq!(dish.id, "d1");
        assert_eq!(dish.name, "Dolcelatte and chickpea spaghetti");
        assert_eq!(dish.price, 19);
    }

    #[test]
    fn test_create_reports_missing_fields_in_order() {
        let mut p = payload();
        p.name = None;
        p.image_url = None;
        assert_eq!(
            Dish::from_create_params("d".into(), p).unwrap_err(),
            DishError::MissingField("name")
        );

        for field in ["name", "description", "price", "image_url"] {
            let mut p = payload();
            match field {
                "name" => p.name = Some(json!("")),
                "description" => p.description = None,
                "price" => p.price = Some(Value::Null),
                _ => p.image_url = Some(json!("")),
            }
            assert_eq!(
                Dish::from_create_params("d".into(), p).unwrap_err(),
                DishError::MissingField(field)
            );
        }
    }

    #[test]
    fn test_create_rejects_bad_prices() {
        for price in [json!(0), json!(-1), json!("17"), json!(3.5)] {
            let mut p = payload();
            p.price = Some(price);
            assert_eq!(
                Dish::from_create_params("d".into(), p).unwrap_err(),
                DishError::InvalidPrice
            );
        }
    }

    #[test]
    fn test_missing_image_url_reported_before_bad_price() {
        let mut p = payload();
        p.price = Some(json!(-1));
        p.image_url = None;
        assert_eq!(
            Dish::from_create_params("d".into(), p).unwrap_err(),
            DishError::MissingField("image_url")
        );
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let mut dish = dish();
        let update = DishPayload::new("Falafel", "Crispy", 7, "https://example.com/falafel.jpg")
            .with_id("d1");

        dish.on_update(update, &()).await.unwrap();
        assert_eq!(dish.id, "d1");
        assert_eq!(dish.name, "Falafel");
        assert_eq!(dish.description, "Crispy");
        assert_eq!(dish.price, 7);
        assert_eq!(dish.image_url, "https://example.com/falafel.jpg");
    }

    #[tokio::test]
    async fn test_update_rejects_mismatched_id_first() {
        let mut dish = dish();
        let mut update = payload().with_id("d2");
        update.name = None;

        let err = dish.on_update(update, &()).await.unwrap_err();
        assert_eq!(
            err,
            DishError::IdMismatch {
                body: "d2".into(),
                route: "d1".into()
            }
        );
        assert_eq!(
            err.to_string(),
            "Dish id does not match route id. Dish: d2, Route: d1"
        );
    }

    #[tokio::test]
    async fn test_rejected_update_changes_nothing() {
        let mut dish = dish();
        let before = dish.clone();
        let mut update = DishPayload::new("Falafel", "Crispy", 7, "https://example.com/f.jpg");
        update.price = Some(json!(0));

        assert_eq!(
            dish.on_update(update, &()).await.unwrap_err(),
            DishError::InvalidPrice
        );
        assert_eq!(dish, before);
    }
}
