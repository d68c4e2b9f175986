//! Order state
//!
//! The set of order lines for one client, keyed by dish id, in insertion
//! order. Every mutation goes through [`OrderState::set_quantity`] (or its
//! wrappers) and reports an [`OrderChange`] so the caller knows what to
//! re-render.

use super::line::OrderLine;
use super::money;
use crate::error::{AppError, AppResult};
use crate::models::{Catalog, Dish};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a single mutation did to the order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderChange {
    /// A new line was appended
    Added { dish_id: i64, quantity: u32 },
    /// An existing line's quantity was replaced in place
    Updated {
        dish_id: i64,
        previous: u32,
        quantity: u32,
    },
    /// A line was removed
    Removed { dish_id: i64 },
    /// Nothing changed (removal of an absent line)
    Unchanged,
}

impl OrderChange {
    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Derived totals for a tip percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub tip: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderState {
    lines: Vec<OrderLine>,
}

impl OrderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quantity of a dish from a raw quantity-change event
    ///
    /// - `quantity > 0`, line present: quantity replaced in place
    /// - `quantity > 0`, line absent: line appended
    /// - `quantity <= 0`: line removed if present
    ///
    /// Fails with `InvalidArgument` when the dish price is negative, not
    /// finite or above [`money::MAX_PRICE`], or the quantity is above
    /// [`money::MAX_QUANTITY`].
    pub fn set_quantity(&mut self, dish: &Dish, quantity: i64) -> AppResult<OrderChange> {
        if quantity <= 0 {
            return Ok(self.remove_line(dish.id));
        }

        money::validate_dish(dish)?;
        let quantity = money::validate_quantity(quantity, dish.id)?;

        let change = match self.lines.iter_mut().find(|l| l.id() == dish.id) {
            Some(line) => {
                let previous = line.quantity;
                line.quantity = quantity;
                OrderChange::Updated {
                    dish_id: dish.id,
                    previous,
                    quantity,
                }
            }
            None => {
                self.lines.push(OrderLine::new(dish.clone(), quantity));
                OrderChange::Added {
                    dish_id: dish.id,
                    quantity,
                }
            }
        };

        tracing::debug!(dish_id = dish.id, quantity, change = ?change, "Order quantity set");
        Ok(change)
    }

    /// Resolve the dish from the catalog, then [`set_quantity`](Self::set_quantity)
    ///
    /// An id that is not on the menu fails with `InvalidArgument`.
    pub fn set_quantity_by_id(
        &mut self,
        catalog: &Catalog,
        dish_id: i64,
        quantity: i64,
    ) -> AppResult<OrderChange> {
        let dish = catalog.get(dish_id).ok_or_else(|| {
            AppError::invalid_argument(format!("dish {} is not in the catalog", dish_id))
                .with_detail("dish_id", dish_id)
        })?;
        self.set_quantity(dish, quantity)
    }

    /// Remove the line for `dish_id`; no-op when absent
    pub fn remove_line(&mut self, dish_id: i64) -> OrderChange {
        let before = self.lines.len();
        self.lines.retain(|l| l.id() != dish_id);
        if self.lines.len() == before {
            return OrderChange::Unchanged;
        }
        tracing::debug!(dish_id, remaining = self.lines.len(), "Order line removed");
        OrderChange::Removed { dish_id }
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn line(&self, dish_id: i64) -> Option<&OrderLine> {
        self.lines.iter().find(|l| l.id() == dish_id)
    }

    /// Current quantity for a dish, 0 when it is not in the order
    pub fn quantity_of(&self, dish_id: i64) -> u32 {
        self.line(dish_id).map_or(0, |l| l.quantity)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// `sum(price * quantity)`; zero for an empty order
    ///
    /// Lines hold capped prices and quantities, so the sum stays far inside
    /// `Decimal` range; it saturates rather than panics.
    pub fn compute_subtotal(&self) -> Decimal {
        self.lines
            .iter()
            .map(OrderLine::subtotal)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// `subtotal * percent / 100`; any percent is applied as given
    ///
    /// A percent large enough to overflow fails with `InvalidArgument`.
    pub fn compute_tip(&self, percent: impl Into<Decimal>) -> AppResult<Decimal> {
        money::tip_amount(self.compute_subtotal(), percent.into())
    }

    pub fn compute_total(&self, percent: impl Into<Decimal>) -> AppResult<Decimal> {
        Ok(self.totals(percent)?.total)
    }

    pub fn totals(&self, percent: impl Into<Decimal>) -> AppResult<OrderTotals> {
        let subtotal = self.compute_subtotal();
        let tip = money::tip_amount(subtotal, percent.into())?;
        Ok(OrderTotals {
            subtotal,
            tip,
            total: money::add_amounts(subtotal, tip)?,
        })
    }
}
