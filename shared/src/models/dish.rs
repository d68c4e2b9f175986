//! Dish Model

use super::category::{Category, category_label};
use serde::{Deserialize, Serialize};

/// Dish entity as served by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Category key (see [`Category`]); unmapped keys are kept verbatim
    pub category: i64,
}

impl Dish {
    pub fn new(id: i64, name: impl Into<String>, price: f64, category: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
        }
    }

    /// Resolved category, if the key is mapped
    pub fn category(&self) -> Option<Category> {
        Category::from_key(self.category)
    }

    /// Category label for display, if the key is mapped
    pub fn category_label(&self) -> Option<&'static str> {
        category_label(self.category)
    }
}
