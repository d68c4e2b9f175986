//! Data models
//!
//! Catalog-side entities. Dishes are immutable once fetched.

pub mod catalog;
pub mod category;
pub mod dish;

// Re-exports
pub use catalog::*;
pub use category::*;
pub use dish::*;
