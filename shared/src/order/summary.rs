//! Summary view-model
//!
//! Pure data for the presentation layer: the order card and the totals
//! block with every amount already formatted.

use super::money::{format_currency, to_decimal};
use super::session::ClientSession;
use super::tip::TipPercent;
use crate::error::AppResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub id: i64,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub subtotal: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsView {
    pub tip_percent: TipPercent,
    pub subtotal: String,
    pub tip: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub table: String,
    pub time: String,
    pub lines: Vec<SummaryLine>,
    /// Present once a tip option has been selected
    pub totals: Option<TotalsView>,
}

impl OrderSummary {
    /// `Ok(None)` when the order is empty
    pub fn build(session: &ClientSession, tip: Option<TipPercent>) -> AppResult<Option<Self>> {
        let order = session.order();
        if order.is_empty() {
            return Ok(None);
        }

        let lines = order
            .lines()
            .iter()
            .map(|line| SummaryLine {
                id: line.id(),
                name: line.name().to_string(),
                quantity: line.quantity,
                price: format_currency(to_decimal(line.price())),
                subtotal: format_currency(line.subtotal()),
            })
            .collect();

        let totals = match tip {
            Some(tip_percent) => {
                let totals = order.totals(tip_percent)?;
                Some(TotalsView {
                    tip_percent,
                    subtotal: format_currency(totals.subtotal),
                    tip: format_currency(totals.tip),
                    total: format_currency(totals.total),
                })
            }
            None => None,
        };

        Ok(Some(Self {
            table: session.table().to_string(),
            time: session.time().to_string(),
            lines,
            totals,
        }))
    }
}
