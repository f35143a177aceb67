use serde::{Deserialize, Serialize};

use super::RestaurantId;

pub type DishId = u64;

/// A menu item. Referenced by orders, never owned by them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub options: Vec<DishOption>,
}

/// A configurable option on a dish, e.g. "Size".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishOption {
    pub name: String,
    /// Flat surcharge added whenever the option is selected.
    pub extra: Option<f64>,
    #[serde(default)]
    pub choices: Vec<DishChoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishChoice {
    pub name: String,
    pub extra: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct DishCreate {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub options: Vec<DishOption>,
}

impl DishOption {
    pub fn new(name: impl Into<String>, extra: Option<f64>) -> Self {
        Self {
            name: name.into(),
            extra,
            choices: Vec::new(),
        }
    }

    pub fn with_choice(mut self, name: impl Into<String>, extra: Option<f64>) -> Self {
        self.choices.push(DishChoice { name: name.into(), extra });
        self
    }

    /// Looks up a choice by exact, case-sensitive name.
    pub fn choice(&self, name: &str) -> Option<&DishChoice> {
        self.choices.iter().find(|choice| choice.name == name)
    }
}

impl Dish {
    /// Looks up an option by exact, case-sensitive name.
    pub fn option(&self, name: &str) -> Option<&DishOption> {
        self.options.iter().find(|option| option.name == name)
    }
}
