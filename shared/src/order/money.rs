//! Money calculation utilities using rust_decimal for precision
//!
//! Prices arrive as `f64` from the catalog. All arithmetic is done in
//! `Decimal`; conversion back to `f64` happens only at the view boundary.

use crate::error::{AppError, AppResult};
use crate::models::Dish;
use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Currency symbol prefixed to every rendered amount
pub const CURRENCY_SYMBOL: &str = "$";

/// Maximum allowed price per dish ($1,000,000)
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per order line
pub const MAX_QUANTITY: u32 = 9999;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_argument(format!(
            "{} must be a finite number, got {}",
            field_name, value
        ))
        .with_detail("field", field_name));
    }
    Ok(())
}

/// Validate a dish before it enters an order
pub fn validate_dish(dish: &Dish) -> AppResult<()> {
    require_finite(dish.price, "price").map_err(|e| e.with_detail("dish_id", dish.id))?;
    if dish.price < 0.0 {
        return Err(AppError::invalid_argument(format!(
            "price must be non-negative, got {}",
            dish.price
        ))
        .with_detail("field", "price")
        .with_detail("dish_id", dish.id));
    }
    if dish.price > MAX_PRICE {
        return Err(AppError::invalid_argument(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, dish.price
        ))
        .with_detail("field", "price")
        .with_detail("dish_id", dish.id));
    }
    Ok(())
}

/// Validate a positive quantity-change value and narrow it to a line quantity
pub fn validate_quantity(quantity: i64, dish_id: i64) -> AppResult<u32> {
    match u32::try_from(quantity) {
        Ok(q) if q <= MAX_QUANTITY => Ok(q),
        _ => Err(AppError::invalid_argument(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, quantity
        ))
        .with_detail("field", "quantity")
        .with_detail("dish_id", dish_id)),
    }
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated via [`validate_dish`].
/// If NaN/Infinity somehow reaches here, logs an error and returns ZERO.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round to 2 decimal places
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_else(|| {
        tracing::error!(value = %value, "Decimal not representable as f64, defaulting to zero");
        0.0
    })
}

/// `price * quantity`
///
/// Bounded by [`MAX_PRICE`] and [`MAX_QUANTITY`] for validated lines;
/// saturates instead of panicking for anything else.
pub fn line_total(price: f64, quantity: u32) -> Decimal {
    to_decimal(price).saturating_mul(Decimal::from(quantity))
}

/// Checked sum of monetary amounts
pub fn sum_amounts(amounts: impl IntoIterator<Item = Decimal>) -> AppResult<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(overflow)
}

/// `subtotal * percent / 100`, failing instead of overflowing
pub fn tip_amount(subtotal: Decimal, percent: Decimal) -> AppResult<Decimal> {
    subtotal
        .checked_mul(percent)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(overflow)
        .map_err(|e| e.with_detail("percent", percent.to_string()))
}

/// `subtotal + tip`, failing instead of overflowing
pub fn add_amounts(a: Decimal, b: Decimal) -> AppResult<Decimal> {
    a.checked_add(b).ok_or_else(overflow)
}

fn overflow() -> AppError {
    AppError::invalid_argument("monetary amount out of range")
}

/// Render an amount as `$` followed by the rounded value without trailing zeros
///
/// `40` → `$40`, `3.50` → `$3.5`, `10.99` → `$10.99`.
pub fn format_currency(value: Decimal) -> String {
    format!("{}{}", CURRENCY_SYMBOL, round_money(value).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);

        let sum_dec = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_non_finite_defaults_to_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(to_f64(line_total(10.99, 3)), 32.97);
        assert_eq!(line_total(5.0, 0), Decimal::ZERO);
    }

    #[test]
    fn test_tip_amount() {
        assert_eq!(tip_amount(Decimal::from(35), Decimal::from(10)).unwrap(), Decimal::new(35, 1));
        assert_eq!(tip_amount(Decimal::from(40), Decimal::from(25)).unwrap(), Decimal::from(10));
        assert_eq!(tip_amount(Decimal::ZERO, Decimal::from(50)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_tip_amount_overflow_is_an_error() {
        let err = tip_amount(Decimal::from(1_000_000_000), Decimal::MAX).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InvalidArgument);
        assert!(add_amounts(Decimal::MAX, Decimal::ONE).is_err());
        assert!(sum_amounts([Decimal::MAX, Decimal::MAX]).is_err());
        assert_eq!(sum_amounts([Decimal::ONE, Decimal::TWO]).unwrap(), Decimal::from(3));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round_money(Decimal::new(1005, 3)), Decimal::new(101, 2));
        assert_eq!(to_f64(Decimal::new(33335, 4)), 3.33);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Decimal::from(40)), "$40");
        assert_eq!(format_currency(Decimal::new(350, 2)), "$3.5");
        assert_eq!(format_currency(Decimal::new(385, 1)), "$38.5");
        assert_eq!(format_currency(Decimal::new(1099, 2)), "$10.99");
        assert_eq!(format_currency(Decimal::ZERO), "$0");
    }

    #[test]
    fn test_validate_dish() {
        assert!(validate_dish(&Dish::new(1, "Taco", 10.0, 1)).is_ok());
        assert!(validate_dish(&Dish::new(2, "Gratis", 0.0, 1)).is_ok());

        let err = validate_dish(&Dish::new(3, "Raro", -1.0, 1)).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InvalidArgument);
        assert_eq!(err.detail("dish_id").unwrap(), 3);

        let err = validate_dish(&Dish::new(4, "Nan", f64::NAN, 1)).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InvalidArgument);
        assert_eq!(err.detail("field").unwrap(), "price");
    }

    #[test]
    fn test_validate_dish_price_cap() {
        assert!(validate_dish(&Dish::new(1, "Banquete", MAX_PRICE, 1)).is_ok());

        // Beyond Decimal range this would otherwise convert to zero
        for price in [MAX_PRICE + 0.01, 1e20, 1e30] {
            let err = validate_dish(&Dish::new(5, "Caro", price, 1)).unwrap_err();
            assert_eq!(err.code, crate::error::ErrorCode::InvalidArgument);
            assert_eq!(err.detail("field").unwrap(), "price");
        }
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1, 1).unwrap(), 1);
        assert_eq!(validate_quantity(9999, 1).unwrap(), MAX_QUANTITY);

        for quantity in [10_000, i64::from(u32::MAX), i64::MAX] {
            let err = validate_quantity(quantity, 7).unwrap_err();
            assert_eq!(err.code, crate::error::ErrorCode::InvalidArgument);
            assert_eq!(err.detail("field").unwrap(), "quantity");
            assert_eq!(err.detail("dish_id").unwrap(), 7);
        }
    }
}
