use thiserror::Error;

use crate::domain::{Dish, DishId, OrderItem};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    #[error("Menu item not found: {0}")]
    ItemNotFound(DishId),
}

/// Price of one line item: the dish's base price plus the surcharges of the
/// options and choices it selects.
///
/// Selections are matched by exact name. A name the dish doesn't define adds
/// nothing, and a choice is only looked up inside the option it was picked
/// under.
pub fn line_price(dish: &Dish, item: &OrderItem) -> f64 {
    let mut price = dish.price;
    for selected in &item.options {
        let Some(option) = dish.option(&selected.name) else {
            continue;
        };
        price += option.extra.unwrap_or(0.0);
        if let Some(choice) = selected.choice.as_deref().and_then(|name| option.choice(name)) {
            price += choice.extra.unwrap_or(0.0);
        }
    }
    price
}

/// Sums [`line_price`] over `items`, resolving each dish through `lookup`.
pub fn compute_total<'a, F>(lookup: F, items: &[OrderItem]) -> Result<f64, PricingError>
where
    F: Fn(DishId) -> Option<&'a Dish>,
{
    items.iter().try_fold(0.0, |total, item| {
        let dish = lookup(item.dish_id).ok_or(PricingError::ItemNotFound(item.dish_id))?;
        Ok(total + line_price(dish, item))
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::{DishOption, OrderItemOption};

    fn dish(id: DishId, price: f64, options: Vec<DishOption>) -> Dish {
        Dish {
            id,
            restaurant_id: 1,
            name: format!("dish {id}"),
            description: String::new(),
            price,
            options,
        }
    }

    fn menu(dishes: Vec<Dish>) -> HashMap<DishId, Dish> {
        dishes.into_iter().map(|d| (d.id, d)).collect()
    }

    #[test]
    fn test_size_and_choice_surcharges_are_added() {
        let size = DishOption::new("Size", Some(2.0)).with_choice("Large", Some(1.0));
        let menu = menu(vec![dish(1, 10.0, vec![]), dish(2, 15.0, vec![size])]);
        let items = vec![
            OrderItem { dish_id: 1, options: vec![] },
            OrderItem { dish_id: 2, options: vec![OrderItemOption::with_choice("Size", "Large")] },
        ];

        let total = compute_total(|id| menu.get(&id), &items).unwrap();
        assert_eq!(total, 28.0);
    }

    #[test]
    fn test_unmatched_names_add_nothing() {
        let spicy = DishOption::new("Spice", Some(0.5)).with_choice("Hot", Some(0.25));
        let menu = menu(vec![dish(1, 8.0, vec![spicy]), dish(2, 4.5, vec![])]);
        let items = vec![
            OrderItem {
                dish_id: 1,
                options: vec![
                    OrderItemOption::new("spice"),
                    OrderItemOption::with_choice("Sauce", "Hot"),
                ],
            },
            OrderItem { dish_id: 2, options: vec![OrderItemOption::with_choice("Size", "Large")] },
        ];

        assert_eq!(compute_total(|id| menu.get(&id), &items).unwrap(), 12.5);
    }

    #[test]
    fn test_choice_only_counts_under_its_own_option() {
        let size = DishOption::new("Size", None).with_choice("Large", Some(3.0));
        let crust = DishOption::new("Crust", Some(1.0)).with_choice("Thin", None);
        let pizza = dish(1, 12.0, vec![size, crust]);

        let item = OrderItem { dish_id: 1, options: vec![OrderItemOption::with_choice("Crust", "Large")] };
        assert_eq!(line_price(&pizza, &item), 13.0);

        let item = OrderItem { dish_id: 1, options: vec![OrderItemOption::with_choice("Size", "Large")] };
        assert_eq!(line_price(&pizza, &item), 15.0);
    }

    #[test]
    fn test_missing_dish_is_reported() {
        let menu = menu(vec![dish(1, 10.0, vec![])]);
        let items = vec![OrderItem { dish_id: 1, options: vec![] }, OrderItem { dish_id: 9, options: vec![] }];
        assert_eq!(compute_total(|id| menu.get(&id), &items), Err(PricingError::ItemNotFound(9)));
    }

    #[test]
    fn test_empty_order_costs_nothing() {
        let menu: HashMap<DishId, Dish> = HashMap::new();
        assert_eq!(compute_total(|id| menu.get(&id), &[]).unwrap(), 0.0);
    }
}
