//! Unified error codes for the order desk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Dish / catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for compact serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// Argument violates an operation precondition
    InvalidArgument = 9,

    // ==================== 4xxx: Order ====================
    /// No client session has been opened yet
    SessionNotStarted = 4001,
    /// Order is empty
    OrderEmpty = 4007,
    /// Tip percentage is not one of the offered options
    InvalidTipPercent = 4009,

    // ==================== 6xxx: Catalog ====================
    /// Catalog could not be fetched
    CatalogUnavailable = 6101,

    // ==================== 9xxx: System ====================
    /// Network error
    NetworkError = 9003,
    /// Timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::InvalidArgument => "Invalid argument",

            // Order
            ErrorCode::SessionNotStarted => "Client session has not been started",
            ErrorCode::OrderEmpty => "Order is empty",
            ErrorCode::InvalidTipPercent => "Invalid tip percentage",

            // Dish / Catalog
            ErrorCode::CatalogUnavailable => "Dish catalog is unavailable",

            // System
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            9 => Ok(ErrorCode::InvalidArgument),

            // Order
            4001 => Ok(ErrorCode::SessionNotStarted),
            4007 => Ok(ErrorCode::OrderEmpty),
            4009 => Ok(ErrorCode::InvalidTipPercent),

            // Dish / Catalog
            6101 => Ok(ErrorCode::CatalogUnavailable),

            // System
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
