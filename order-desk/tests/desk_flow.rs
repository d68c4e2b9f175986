// order-desk/tests/desk_flow.rs
// End-to-end desk flow against stub catalog providers

use async_trait::async_trait;
use menu_client::{CatalogProvider, ClientConfig, ClientError, ClientResult};
use order_desk::render::{EMPTY_CATALOG_MESSAGE, EMPTY_ORDER_MESSAGE};
use order_desk::{Desk, DeskCommand};
use shared::models::Dish;
use shared::order::TipPercent;
use rust_decimal::Decimal;
use std::time::Duration;

struct StaticCatalog(Vec<Dish>);

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn fetch_dishes(&self) -> ClientResult<Vec<Dish>> {
        Ok(self.0.clone())
    }
}

struct FailingCatalog;

#[async_trait]
impl CatalogProvider for FailingCatalog {
    async fn fetch_dishes(&self) -> ClientResult<Vec<Dish>> {
        Err(ClientError::Internal("connection refused".to_string()))
    }
}

fn menu() -> StaticCatalog {
    StaticCatalog(vec![
        Dish::new(1, "Taco", 10.0, 1),
        Dish::new(2, "Agua", 5.0, 2),
        Dish::new(3, "Flan", 4.0, 3),
    ])
}

async fn open_desk() -> Desk {
    let mut desk = Desk::new();
    assert!(desk.save_client("5", "20:00"));
    assert!(desk.load_catalog(&menu()).await);
    desk
}

#[tokio::test]
async fn test_taco_scenario() {
    let mut desk = open_desk().await;

    desk.handle(DeskCommand::Quantity { dish_id: 1, quantity: 4 });
    let order = desk.session().unwrap().order();
    assert_eq!(order.len(), 1);
    assert_eq!(order.lines()[0].quantity, 4);
    assert_eq!(order.lines()[0].price(), 10.0);
    assert_eq!(order.compute_subtotal(), Decimal::from(40));
    assert_eq!(order.compute_tip(TipPercent::TwentyFive).unwrap(), Decimal::from(10));
    assert_eq!(order.compute_total(TipPercent::TwentyFive).unwrap(), Decimal::from(50));

    let outcome = desk.handle_line("propina 25");
    assert!(outcome.screen.contains("Mesa: 5"));
    assert!(outcome.screen.contains("Hora: 20:00"));
    assert!(outcome.screen.contains("Subtotal Consumo: $40"));
    assert!(outcome.screen.contains("Propina: $10"));
    assert!(outcome.screen.contains("Total a pagar: $50"));
}

#[tokio::test]
async fn test_totals_follow_quantity_changes() {
    let mut desk = open_desk().await;
    desk.handle_line("cantidad 1 2");
    desk.handle_line("cantidad 2 3");
    desk.handle_line("propina 10");

    let outcome = desk.handle_line("resumen");
    assert!(outcome.screen.contains("Subtotal Consumo: $35"));
    assert!(outcome.screen.contains("Propina: $3.5"));
    assert!(outcome.screen.contains("Total a pagar: $38.5"));

    let outcome = desk.handle_line("cantidad 2 1");
    assert!(outcome.screen.contains("Subtotal Consumo: $25"));
    assert_eq!(desk.session().unwrap().order().len(), 2);
}

#[tokio::test]
async fn test_removing_last_line_shows_empty_message() {
    let mut desk = open_desk().await;
    let outcome = desk.handle_line("cantidad 3 1");
    assert!(!outcome.screen.contains(EMPTY_ORDER_MESSAGE));

    let outcome = desk.handle_line("eliminar 3");
    assert!(desk.session().unwrap().order().is_empty());
    assert!(outcome.screen.contains(EMPTY_ORDER_MESSAGE));
    // catalog row quantity is back to zero
    assert!(outcome.screen.lines().any(|l| l.contains("Flan") && l.ends_with("[0]")));
}

#[tokio::test]
async fn test_unknown_dish_is_reported() {
    let mut desk = open_desk().await;
    let outcome = desk.handle_line("cantidad 99 1");
    assert!(outcome.screen.contains("dish 99 is not in the catalog"));
    assert!(desk.session().unwrap().order().is_empty());
}

#[tokio::test]
async fn test_out_of_range_input_is_reported() {
    let mut desk = Desk::new();
    desk.save_client("5", "20:00");
    let catalog = StaticCatalog(vec![Dish::new(1, "Taco", 10.0, 1), Dish::new(2, "Caro", 1e30, 1)]);
    assert!(desk.load_catalog(&catalog).await);

    let outcome = desk.handle_line("cantidad 1 4294967295");
    assert!(outcome.screen.contains("quantity exceeds maximum allowed"));
    let outcome = desk.handle_line("cantidad 2 1");
    assert!(outcome.screen.contains("price exceeds maximum allowed"));
    assert!(desk.session().unwrap().order().is_empty());

    desk.handle_line("cantidad 1 9999");
    let outcome = desk.handle_line("propina 50");
    assert!(outcome.screen.contains("Total a pagar: $149985"));
}

#[tokio::test]
async fn test_unreachable_catalog_keeps_desk_running() {
    let mut desk = Desk::new();
    desk.save_client("4", "19:45");
    let config = ClientConfig::new("http://127.0.0.1:1").with_timeout(Duration::from_millis(500));
    assert!(!desk.connect_catalog(&config).await);
    assert!(desk.catalog().is_empty());

    let outcome = desk.handle_line("resumen");
    assert!(outcome.screen.contains(EMPTY_CATALOG_MESSAGE));
    assert!(outcome.screen.contains(EMPTY_ORDER_MESSAGE));
    assert!(!outcome.quit);
}

#[tokio::test]
async fn test_fetch_failure_leaves_catalog_empty() {
    let mut desk = Desk::new();
    desk.save_client("2", "13:00");
    assert!(!desk.load_catalog(&FailingCatalog).await);
    assert!(desk.catalog().is_empty());

    let outcome = desk.handle_line("menu");
    assert!(outcome.screen.contains(EMPTY_CATALOG_MESSAGE));
    assert!(!outcome.quit);
}

#[tokio::test]
async fn test_bad_input_keeps_running() {
    let mut desk = open_desk().await;
    let outcome = desk.handle_line("cantidad uno 2");
    assert!(outcome.screen.contains("must be an integer"));
    assert!(!outcome.quit);

    let outcome = desk.handle_line("resumen");
    assert!(!outcome.screen.contains("must be an integer"));
}
