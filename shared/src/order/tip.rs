//! Tip options offered to the client

use crate::error::{AppError, AppResult, ErrorCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tip percentage, chosen from a fixed set of options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum TipPercent {
    Ten,
    TwentyFive,
    Fifty,
}

impl TipPercent {
    /// Options in display order
    pub const ALL: [TipPercent; 3] = [TipPercent::Ten, TipPercent::TwentyFive, TipPercent::Fifty];

    pub const fn percent(&self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
        }
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.percent())
    }
}

impl From<TipPercent> for u32 {
    fn from(tip: TipPercent) -> Self {
        tip.percent()
    }
}

impl From<TipPercent> for Decimal {
    fn from(tip: TipPercent) -> Self {
        tip.as_decimal()
    }
}

impl TryFrom<u32> for TipPercent {
    type Error = AppError;

    fn try_from(value: u32) -> AppResult<Self> {
        match value {
            10 => Ok(Self::Ten),
            25 => Ok(Self::TwentyFive),
            50 => Ok(Self::Fifty),
            other => Err(AppError::with_message(
                ErrorCode::InvalidTipPercent,
                format!("tip must be one of 10, 25 or 50, got {}", other),
            )
            .with_detail("percent", other)),
        }
    }
}

impl fmt::Display for TipPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from() {
        assert_eq!(TipPercent::try_from(10).unwrap(), TipPercent::Ten);
        assert_eq!(TipPercent::try_from(25).unwrap(), TipPercent::TwentyFive);
        assert_eq!(TipPercent::try_from(50).unwrap(), TipPercent::Fifty);

        let err = TipPercent::try_from(15).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTipPercent);
    }

    #[test]
    fn test_display_and_decimal() {
        assert_eq!(TipPercent::TwentyFive.to_string(), "25%");
        assert_eq!(Decimal::from(TipPercent::Fifty), Decimal::from(50));
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&TipPercent::Ten).unwrap(), "10");
        assert!(serde_json::from_str::<TipPercent>("33").is_err());
    }
}
