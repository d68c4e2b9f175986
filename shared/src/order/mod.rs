//! Order state core
//!
//! - [`OrderState`]: the set of order lines and the single mutation entry point
//! - [`ClientSession`]: table/time identity owning one order
//! - [`money`]: decimal arithmetic and currency display
//! - [`OrderSummary`]: view-model for the presentation layer

pub mod line;
pub mod money;
pub mod session;
pub mod state;
pub mod summary;
pub mod tip;

pub use line::OrderLine;
pub use session::ClientSession;
pub use state::{OrderChange, OrderState, OrderTotals};
pub use summary::{OrderSummary, SummaryLine, TotalsView};
pub use tip::TipPercent;
