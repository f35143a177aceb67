use crate::actor_framework::Entity;
use crate::domain::{Dish, DishCreate, DishId};

fn check_price(price: f64) -> Result<f64, String> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(format!("Invalid price: {price}"))
    }
}

impl Entity for Dish {
    type Id = DishId;
    type CreatePayload = DishCreate;
    type Patch = ();
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &DishId {
        &self.id
    }

    fn from_create(id: DishId, payload: DishCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            restaurant_id: payload.restaurant_id,
            name: payload.name,
            description: payload.description,
            price: check_price(payload.price)?,
            options: payload.options,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(price: f64) -> DishCreate {
        DishCreate {
            restaurant_id: 1,
            name: "Soup".into(),
            description: String::new(),
            price,
            options: vec![],
        }
    }

    #[test]
    fn test_price_must_be_finite_and_non_negative() {
        assert_eq!(Dish::from_create(1, payload(4.5)).unwrap().price, 4.5);
        assert!(Dish::from_create(1, payload(-1.0)).is_err());
        assert!(Dish::from_create(1, payload(f64::NAN)).is_err());
    }
}
