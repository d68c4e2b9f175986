//! Shared types for the order desk
//!
//! Domain models, the order state core and the unified error system used by
//! the catalog client and the desk.

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Catalog, Category, Dish};
pub use order::{ClientSession, OrderChange, OrderLine, OrderState, OrderSummary, TipPercent};
