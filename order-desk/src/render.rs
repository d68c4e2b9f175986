//! Text rendering of the desk screen
//!
//! Every function here is pure: it turns state or view-models into lines of
//! text and never mutates anything.

use shared::models::Catalog;
use shared::order::money::{format_currency, to_decimal};
use shared::order::{OrderState, OrderSummary, TipPercent};
use std::fmt::Write;

pub const MISSING_FIELDS_NOTICE: &str = "Todos los campos son obligatorios";
pub const EMPTY_ORDER_MESSAGE: &str = "Añade los elementos del pedido";
pub const EMPTY_CATALOG_MESSAGE: &str = "No hay platillos disponibles";

/// Catalog table with the quantity currently ordered for each dish
pub fn render_catalog(catalog: &Catalog, order: Option<&OrderState>) -> String {
    let mut out = String::from("== Platillos ==\n");
    if catalog.is_empty() {
        out.push_str(EMPTY_CATALOG_MESSAGE);
        out.push('\n');
        return out;
    }

    for dish in catalog.dishes() {
        let quantity = order.map_or(0, |o| o.quantity_of(dish.id));
        let _ = writeln!(
            out,
            "#{:<4} {:<28} {:>8}  {:<8}  [{}]",
            dish.id,
            dish.name,
            format_currency(to_decimal(dish.price)),
            dish.category_label().unwrap_or(""),
            quantity
        );
    }
    out
}

/// Summary card, or the empty order message
pub fn render_summary(summary: Option<&OrderSummary>) -> String {
    let mut out = String::from("== Resumen ==\n");
    let Some(summary) = summary else {
        out.push_str(EMPTY_ORDER_MESSAGE);
        out.push('\n');
        return out;
    };

    out.push_str("Platillos consumidos\n");
    let _ = writeln!(out, "Mesa: {}", summary.table);
    let _ = writeln!(out, "Hora: {}", summary.time);
    for line in &summary.lines {
        let _ = writeln!(out, "- {} (#{})", line.name, line.id);
        let _ = writeln!(out, "  Cantidad: {}", line.quantity);
        let _ = writeln!(out, "  Precio: {}", line.price);
        let _ = writeln!(out, "  Subtotal: {}", line.subtotal);
    }

    out.push_str(&render_tip(summary));
    out
}

/// Tip options and, once one is selected, the totals block
fn render_tip(summary: &OrderSummary) -> String {
    let selected = summary.totals.as_ref().map(|t| t.tip_percent);
    let options: Vec<String> = TipPercent::ALL
        .iter()
        .map(|tip| {
            let mark = if Some(*tip) == selected { 'x' } else { ' ' };
            format!("({}) {}", mark, tip)
        })
        .collect();

    let mut out = String::from("== Propina ==\n");
    out.push_str(&options.join("  "));
    out.push('\n');

    if let Some(totals) = &summary.totals {
        let _ = writeln!(out, "Subtotal Consumo: {}", totals.subtotal);
        let _ = writeln!(out, "Propina: {}", totals.tip);
        let _ = writeln!(out, "Total a pagar: {}", totals.total);
    }
    out
}
