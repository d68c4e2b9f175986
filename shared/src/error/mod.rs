//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Dish / catalog errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::OrderEmpty);
//! assert_eq!(err.code.code(), 4007);
//!
//! let err = AppError::required_field("Missing required field")
//!     .with_detail("field", "table");
//! assert!(err.detail("field").is_some());
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
