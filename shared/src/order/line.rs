//! Order line: a dish with a chosen quantity

use super::money;
use crate::models::Dish;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dish with a chosen quantity within one client's order
///
/// Serializes flat (`{id, name, price, category, quantity}`).
/// The quantity of a line held by an order is always positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(flatten)]
    pub dish: Dish,
    pub quantity: u32,
}

impl OrderLine {
    pub(crate) fn new(dish: Dish, quantity: u32) -> Self {
        Self { dish, quantity }
    }

    pub fn id(&self) -> i64 {
        self.dish.id
    }

    pub fn name(&self) -> &str {
        &self.dish.name
    }

    pub fn price(&self) -> f64 {
        self.dish.price
    }

    /// `price * quantity`
    pub fn subtotal(&self) -> Decimal {
        money::line_total(self.dish.price, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_subtotal() {
        let line = OrderLine::new(Dish::new(1, "Taco", 10.0, 1), 4);
        assert_eq!(line.subtotal(), Decimal::from(40));
        assert_eq!(line.id(), 1);
        assert_eq!(line.name(), "Taco");
    }

    #[test]
    fn test_serializes_flat() {
        let line = OrderLine::new(Dish::new(1, "Taco", 10.0, 1), 4);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["quantity"], 4);
        assert_eq!(json["price"], 10.0);
        assert_eq!(json["name"], "Taco");
    }
}
